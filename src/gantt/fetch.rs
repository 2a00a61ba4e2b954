use anyhow::Result;

use crate::error::SyncError;
use crate::providers::notion::NotionPage;
use crate::providers::QuerySource;

/// Page through the whole database, keeping server order. Any failed request
/// aborts the fetch and nothing collected so far is returned.
pub async fn fetch_all_pages(source: &dyn QuerySource) -> Result<Vec<NotionPage>> {
    let mut pages = Vec::new();
    let mut cursor: Option<String> = None;
    let mut requests = 0usize;

    loop {
        let batch = source.query_page(cursor.as_deref()).await?;
        requests += 1;
        log::debug!(
            "Query page {requests}: {} results, has_more={}",
            batch.results.len(),
            batch.has_more
        );
        pages.extend(batch.results);

        if !batch.has_more {
            break;
        }
        match batch.next_cursor {
            Some(next) => cursor = Some(next),
            None => {
                return Err(SyncError::Protocol {
                    service: "Notion",
                    message: format!("has_more set without next_cursor on page {requests}"),
                }
                .into())
            }
        }
    }

    Ok(pages)
}
