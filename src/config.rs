use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::SyncError;

pub const NOTION_API_KEY_VAR: &str = "NOTION_API_KEY";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub notion: NotionConfig,
    pub gemini: GeminiConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    pub database_id: String,
    pub api_url: String,
    pub notion_version: String,
    pub output: PathBuf,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            database_id: "291cdd12fc5e81ceafeadc78e6c03258".into(),
            api_url: "https://api.notion.com/v1".into(),
            notion_version: "2022-06-28".into(),
            output: PathBuf::from("gantt_data.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_url: String,
    pub model: String,
    pub output_dir: PathBuf,
    pub aspect_ratio: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            model: "gemini-2.5-flash-image".into(),
            output_dir: PathBuf::from("positionings/images"),
            aspect_ratio: "16:9".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// API keys. Read once at startup and handed to the clients, never looked up
/// again mid-run.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub notion_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        Self {
            notion_api_key: non_empty(NOTION_API_KEY_VAR),
            gemini_api_key: non_empty(GEMINI_API_KEY_VAR),
        }
    }

    pub fn notion(&self) -> Result<&str, SyncError> {
        self.notion_api_key
            .as_deref()
            .ok_or(SyncError::MissingCredential {
                var: NOTION_API_KEY_VAR,
            })
    }

    pub fn gemini(&self) -> Result<&str, SyncError> {
        self.gemini_api_key
            .as_deref()
            .ok_or(SyncError::MissingCredential {
                var: GEMINI_API_KEY_VAR,
            })
    }
}

fn user_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".sitedata")
        .join("config.toml")
}

/// Load config from an explicit path, else `./sitedata.toml`, else
/// `~/.sitedata/config.toml`, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return from_file(path);
    }

    let local = PathBuf::from("sitedata.toml");
    if local.exists() {
        return from_file(&local);
    }

    let user = user_config_path();
    if user.exists() {
        return from_file(&user);
    }

    log::debug!("No config file found, using defaults");
    Ok(AppConfig::default())
}

pub fn from_file(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    if config.http.timeout_secs == 0 {
        bail!(
            "{}: [http] timeout_secs must be at least 1",
            path.display()
        );
    }
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
