use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use std::time::Duration;

use super::ImageBackend;
use crate::config::GeminiConfig;
use crate::error::SyncError;

pub struct GeminiClient {
    url: String,
    api_key: String,
    aspect_ratio: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            url: format!(
                "{}/models/{}:generateContent",
                config.api_url.trim_end_matches('/'),
                config.model
            ),
            api_key: api_key.to_string(),
            aspect_ratio: config.aspect_ratio.clone(),
            client,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(rename = "inlineData", alias = "inline_data")]
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
struct InlineData {
    data: String,
}

fn request_body(prompt: &str, aspect_ratio: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generation_config": {
            "image_config": { "aspect_ratio": aspect_ratio }
        }
    })
}

/// Pull the first inline image out of the first candidate and decode it.
pub(crate) fn decode_image(resp: GenerateResponse) -> Result<Vec<u8>> {
    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| SyncError::NoImage("no candidates in response".into()))?;

    let data = candidate
        .content
        .into_iter()
        .flat_map(|c| c.parts)
        .find_map(|p| p.inline_data)
        .map(|d| d.data)
        .ok_or_else(|| SyncError::NoImage("no inline image data in candidate".into()))?;

    base64::engine::general_purpose::STANDARD
        .decode(data.trim())
        .context("Image data is not valid base64")
}

#[async_trait]
impl ImageBackend for GeminiClient {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .post(&self.url)
            .query(&[("key", &self.api_key)])
            .json(&request_body(prompt, &self.aspect_ratio))
            .send()
            .await
            .context("Gemini generateContent request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Http {
                service: "Gemini",
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .context("Failed to parse Gemini response")?;
        decode_image(parsed)
    }
}
