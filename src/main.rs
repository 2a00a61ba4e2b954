mod cli;
mod config;
mod error;
mod gantt;
mod images;
mod logging;
mod model;
mod providers;
mod util;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use config::Credentials;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.debug);

    // .env is optional; real environment variables take precedence
    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("Loaded environment from {}", path.display());
    }

    let config = config::load_config(cli.config.as_deref())?;
    let credentials = Credentials::from_env();

    match cli.command {
        Command::Gantt(args) => cli::handle_gantt(&config, &credentials, args).await,
        Command::Images(args) => cli::handle_images(&config, &credentials, args).await,
    }
}
