use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

use super::QuerySource;
use crate::config::NotionConfig;
use crate::error::SyncError;

/// A database row as returned by `databases/{id}/query`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionPage {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryPage {
    pub results: Vec<NotionPage>,
    #[serde(default)]
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

pub struct NotionClient {
    query_url: String,
    database_id: String,
    notion_version: String,
    api_key: String,
    client: reqwest::Client,
}

impl NotionClient {
    pub fn new(config: &NotionConfig, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            query_url: query_url(&config.api_url, &config.database_id),
            database_id: config.database_id.clone(),
            notion_version: config.notion_version.clone(),
            api_key: api_key.to_string(),
            client,
        })
    }
}

fn query_url(api_url: &str, database_id: &str) -> String {
    format!(
        "{}/databases/{database_id}/query",
        api_url.trim_end_matches('/')
    )
}

fn query_body(start_cursor: Option<&str>) -> Value {
    let mut body = Map::new();
    if let Some(cursor) = start_cursor {
        body.insert("start_cursor".into(), Value::String(cursor.to_string()));
    }
    Value::Object(body)
}

#[async_trait]
impl QuerySource for NotionClient {
    fn database_id(&self) -> &str {
        &self.database_id
    }

    async fn query_page(&self, start_cursor: Option<&str>) -> Result<QueryPage> {
        let resp = self
            .client
            .post(&self.query_url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", &self.notion_version)
            .json(&query_body(start_cursor))
            .send()
            .await
            .context("Notion query request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Http {
                service: "Notion",
                status: status.as_u16(),
                body,
            }
            .into());
        }

        resp.json()
            .await
            .context("Failed to parse Notion query response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_url_joins_without_double_slash() {
        assert_eq!(
            query_url("https://api.notion.com/v1/", "abc123"),
            "https://api.notion.com/v1/databases/abc123/query"
        );
        assert_eq!(
            query_url("http://127.0.0.1:9000", "db"),
            "http://127.0.0.1:9000/databases/db/query"
        );
    }

    #[test]
    fn first_request_omits_cursor() {
        assert_eq!(query_body(None), json!({}));
        assert_eq!(query_body(Some("cur1")), json!({"start_cursor": "cur1"}));
    }

    #[test]
    fn parses_query_response() {
        let raw = json!({
            "object": "list",
            "results": [
                {"object": "page", "id": "p1", "properties": {"Category": {"type": "select", "select": null}}},
                {"object": "page", "id": "p2"}
            ],
            "has_more": true,
            "next_cursor": "cur1"
        });
        let page: QueryPage = serde_json::from_value(raw).unwrap();
        assert_eq!(page.results.len(), 2);
        assert!(page.results[0].properties.contains_key("Category"));
        assert!(page.results[1].properties.is_empty());
        assert!(page.has_more);
        assert_eq!(page.next_cursor.as_deref(), Some("cur1"));
    }

    #[test]
    fn last_page_has_null_cursor() {
        let raw = json!({"results": [], "has_more": false, "next_cursor": null});
        let page: QueryPage = serde_json::from_value(raw).unwrap();
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn response_without_results_is_rejected() {
        let raw = json!({"object": "error", "message": "nope"});
        assert!(serde_json::from_value::<QueryPage>(raw).is_err());
    }

    #[test]
    fn client_keeps_database_id() {
        let config = NotionConfig {
            database_id: "abc123".into(),
            ..Default::default()
        };
        let client = NotionClient::new(&config, "secret", Duration::from_secs(5)).unwrap();
        assert_eq!(client.database_id(), "abc123");
        assert!(client.query_url.ends_with("/databases/abc123/query"));
    }
}
