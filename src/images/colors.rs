use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::slides::TextColor;
use crate::util::fs::write_atomic;

pub const TEXT_COLORS_FILE: &str = "text_colors.json";

/// Slide number → overlay text colour, kept in `text_colors.json` next to the
/// images. Entries from earlier runs survive partial regenerations, whatever
/// values they hold.
pub struct TextColorMap {
    path: PathBuf,
    colors: BTreeMap<String, Value>,
}

impl TextColorMap {
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(TEXT_COLORS_FILE);
        let colors = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, colors })
    }

    pub fn record(&mut self, slide: u32, color: TextColor) {
        self.colors
            .insert(slide.to_string(), Value::String(color.as_str().to_string()));
    }

    pub fn entries(&self) -> &BTreeMap<String, Value> {
        &self.colors
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.colors)?;
        write_atomic(&self.path, json)
    }
}
