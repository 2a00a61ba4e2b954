pub mod gemini;
pub mod notion;

use anyhow::Result;
use async_trait::async_trait;

use notion::QueryPage;

/// One page of a paginated database query.
#[async_trait]
pub trait QuerySource: Send + Sync {
    fn database_id(&self) -> &str;

    /// Fetch the page starting at `start_cursor`, or the first page when `None`.
    async fn query_page(&self, start_cursor: Option<&str>) -> Result<QueryPage>;
}

/// Single-shot text-to-image generation.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    fn name(&self) -> &str;

    /// Returns the decoded image bytes.
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>>;
}
