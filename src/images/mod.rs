pub mod colors;
pub mod slides;

use anyhow::{Context, Result};
use std::path::Path;

use crate::providers::ImageBackend;
use crate::util::fs::write_atomic;
use colors::TextColorMap;
use slides::Slide;

#[derive(Debug, Default)]
pub struct ImageRunSummary {
    pub generated: Vec<u32>,
    pub failed: Vec<u32>,
}

/// Generate one PNG per slide, then merge the slides' text colours into
/// `text_colors.json`. A failed slide is logged and skipped; its colour is
/// still recorded.
pub async fn generate_slides(
    backend: &dyn ImageBackend,
    slides: &[&Slide],
    output_dir: &Path,
) -> Result<ImageRunSummary> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let mut colors = TextColorMap::load(output_dir)?;
    let mut summary = ImageRunSummary::default();

    for slide in slides {
        let path = output_dir.join(slide.file_name());
        log::info!("Generating {} with {}...", slide.file_name(), backend.name());

        let result = match backend.generate(&slide.full_prompt()).await {
            Ok(bytes) => write_atomic(&path, bytes),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                log::info!("Image saved to {}", path.display());
                summary.generated.push(slide.number);
            }
            Err(e) => {
                log::error!("Slide {} ({}) failed: {e:#}", slide.number, slide.name);
                summary.failed.push(slide.number);
            }
        }

        colors.record(slide.number, slide.background.text_color());
    }

    colors.save()?;
    log::info!(
        "Text colors saved to {} ({} slides)",
        colors.path().display(),
        colors.entries().len()
    );
    Ok(summary)
}
