pub mod fetch;
pub mod normalize;
pub mod report;

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

use crate::model::gantt::GanttExport;
use crate::providers::QuerySource;
use crate::util::fs::write_atomic;

pub struct ExportSummary {
    pub task_count: usize,
    pub by_category: BTreeMap<String, usize>,
}

/// Fetch the whole database, flatten it and replace `output` with the result.
/// The file is only touched once every page has been fetched.
pub async fn run_export(source: &dyn QuerySource, output: &Path) -> Result<ExportSummary> {
    log::info!(
        "Fetching Gantt data from Notion database {}...",
        source.database_id()
    );
    let pages = fetch::fetch_all_pages(source).await?;
    log::info!("Found {} tasks", pages.len());

    let tasks = normalize::to_gantt_tasks(&pages);
    let by_category = report::count_by_category(&tasks);
    let export = GanttExport::new(source.database_id(), tasks, chrono::Utc::now());

    log::info!("Writing to {}...", output.display());
    let json = serde_json::to_string_pretty(&export).context("Failed to serialize export")?;
    write_atomic(output, json)?;

    Ok(ExportSummary {
        task_count: export.task_count,
        by_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::FieldValue;
    use crate::providers::tests::{make_page, MockNotion};

    fn two_page_source() -> MockNotion {
        MockNotion::new("abc123")
            .with_page(
                vec![
                    make_page("a", "Task A", Some("Build")),
                    make_page("b", "Task B", None),
                ],
                Some("cur1"),
            )
            .with_page(vec![make_page("c", "Task C", Some("Build"))], None)
    }

    #[tokio::test]
    async fn exports_two_pages_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("gantt_data.json");
        let source = two_page_source();

        let summary = run_export(&source, &output).await.unwrap();

        assert_eq!(
            source.cursors.lock().unwrap().as_slice(),
            &[None, Some("cur1".to_string())]
        );
        assert_eq!(summary.task_count, 3);
        assert_eq!(summary.by_category["Build"], 2);
        assert_eq!(summary.by_category["Uncategorized"], 1);
        assert_eq!(
            report::format_category_report(&summary.by_category),
            "Tasks by category:\n  Build: 2\n  Uncategorized: 1\n"
        );

        let written: GanttExport =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written.database_id, "abc123");
        assert_eq!(written.task_count, 3);
        let names: Vec<Option<FieldValue>> =
            written.tasks.iter().map(|t| t.name.clone()).collect();
        assert_eq!(
            names,
            vec![
                Some(FieldValue::Text("Task A".into())),
                Some(FieldValue::Text("Task B".into())),
                Some(FieldValue::Text("Task C".into())),
            ]
        );
        assert!(chrono::DateTime::parse_from_rfc3339(&written.exported_at).is_ok());
    }

    #[tokio::test]
    async fn output_replaces_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("gantt_data.json");
        std::fs::write(&output, r#"{"stale": true}"#).unwrap();

        run_export(&two_page_source(), &output).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert!(raw.get("stale").is_none());
        assert_eq!(raw["task_count"], 3);
    }

    #[tokio::test]
    async fn fetch_failure_leaves_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("gantt_data.json");
        std::fs::write(&output, "previous export").unwrap();

        let source = MockNotion::new("abc123")
            .with_page(vec![make_page("a", "Task A", None)], Some("cur1"))
            .with_http_failure(429);

        assert!(run_export(&source, &output).await.is_err());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous export");
    }

    #[tokio::test]
    async fn fetch_failure_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("gantt_data.json");
        let source = MockNotion::new("abc123").with_http_failure(401);

        assert!(run_export(&source, &output).await.is_err());
        assert!(!output.exists());
    }
}
