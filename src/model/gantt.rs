use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::property::FieldValue;

/// One Gantt row as written to `gantt_data.json`. Absent slots serialize as
/// `null` so the page script can rely on every key being present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GanttTask {
    pub id: String,
    pub name: Option<FieldValue>,
    pub category: Option<FieldValue>,
    pub start_date: Option<FieldValue>,
    pub end_date: Option<FieldValue>,
    pub status: Option<FieldValue>,
    pub priority: Option<FieldValue>,
    pub assigned_to: Option<FieldValue>,
    pub progress: Option<FieldValue>,
    pub dependencies: Option<FieldValue>,
    pub tags: Option<FieldValue>,
    pub budget_cost: Option<FieldValue>,
    pub one_time_cost: Option<FieldValue>,
    pub monthly_cost: Option<FieldValue>,
    pub blocked_by: Option<FieldValue>,
    pub blocking: Option<FieldValue>,
}

impl GanttTask {
    /// Category label used for grouping; blank or non-text categories count
    /// as uncategorized.
    pub fn category_label(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(FieldValue::as_text)
            .filter(|label| !label.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GanttExport {
    pub exported_at: String,
    pub database_id: String,
    pub task_count: usize,
    pub tasks: Vec<GanttTask>,
}

impl GanttExport {
    pub fn new(database_id: &str, tasks: Vec<GanttTask>, exported_at: DateTime<Utc>) -> Self {
        Self {
            exported_at: exported_at.to_rfc3339(),
            database_id: database_id.to_string(),
            task_count: tasks.len(),
            tasks,
        }
    }
}
