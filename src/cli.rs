use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{AppConfig, Credentials, NotionConfig};
use crate::gantt::{self, report};
use crate::images::{self, slides};
use crate::providers::gemini::GeminiClient;
use crate::providers::notion::NotionClient;

#[derive(Parser, Debug)]
#[command(name = "sitedata")]
#[command(about = "Export Notion Gantt data and generate slide images for the static site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path (default: ./sitedata.toml or ~/.sitedata/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export the Notion Gantt database to JSON
    Gantt(GanttArgs),
    /// Generate slide background images with Gemini
    Images(ImagesArgs),
}

#[derive(Args, Debug)]
pub struct GanttArgs {
    /// Notion database to export (overrides config)
    #[arg(long)]
    pub database_id: Option<String>,

    /// Output JSON path (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ImagesArgs {
    /// Slide numbers to regenerate; all slides when omitted
    #[arg(value_name = "SLIDE")]
    pub slides: Vec<u32>,

    /// Directory for images and text_colors.json (overrides config)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

const NOTION_SETUP: &str = "\
A Notion integration token is required. To set it up:
1. Go to https://www.notion.so/my-integrations
2. Create a new integration
3. Copy the 'Internal Integration Token'
4. Share your Gantt Chart database with the integration
5. Export the key: export NOTION_API_KEY='your-key-here' (or add it to .env)";

const GEMINI_SETUP: &str = "A Gemini API key is required. Add GEMINI_API_KEY to your environment or .env file";

pub async fn handle_gantt(
    config: &AppConfig,
    credentials: &Credentials,
    args: GanttArgs,
) -> Result<()> {
    let api_key = credentials.notion().context(NOTION_SETUP)?;

    let notion = NotionConfig {
        database_id: args
            .database_id
            .unwrap_or_else(|| config.notion.database_id.clone()),
        ..config.notion.clone()
    };
    let output = args.output.unwrap_or_else(|| notion.output.clone());

    let client = NotionClient::new(&notion, api_key, config.http.timeout())?;
    let summary = gantt::run_export(&client, &output).await?;

    println!(
        "Successfully exported {} tasks to {}",
        summary.task_count,
        output.display()
    );
    println!();
    print!("{}", report::format_category_report(&summary.by_category));
    Ok(())
}

pub async fn handle_images(
    config: &AppConfig,
    credentials: &Credentials,
    args: ImagesArgs,
) -> Result<()> {
    let api_key = credentials.gemini().context(GEMINI_SETUP)?;

    let selected = slides::select_slides(&args.slides);
    if selected.is_empty() {
        bail!("No matching slides for {:?}", args.slides);
    }
    if args.slides.is_empty() {
        log::info!("Generating all {} images", selected.len());
    } else {
        log::info!("Regenerating slides: {:?}", args.slides);
    }

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| config.gemini.output_dir.clone());
    log::info!("Output directory: {}", output_dir.display());

    let client = GeminiClient::new(&config.gemini, api_key, config.http.timeout())?;
    let summary = images::generate_slides(&client, &selected, &output_dir).await?;

    println!(
        "Generated {} of {} images in {}",
        summary.generated.len(),
        selected.len(),
        output_dir.display()
    );
    if !summary.failed.is_empty() {
        bail!("Failed slides: {:?}", summary.failed);
    }
    Ok(())
}
