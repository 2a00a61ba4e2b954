use serde_json::{Map, Value};

use crate::model::gantt::GanttTask;
use crate::model::property::{FieldValue, PropertyValue};
use crate::providers::notion::NotionPage;

fn extract(properties: &Map<String, Value>, name: &str) -> Option<FieldValue> {
    let raw = properties.get(name)?;
    match PropertyValue::parse(raw) {
        Ok(value) => value.extract(),
        Err(e) => {
            log::warn!("Ignoring property `{name}`: {e}");
            None
        }
    }
}

fn extract_date(properties: &Map<String, Value>, name: &str) -> Option<FieldValue> {
    extract(properties, name).map(FieldValue::into_date_start)
}

/// Flatten one database row into the fixed Gantt slots.
pub fn to_gantt_task(page: &NotionPage) -> GanttTask {
    let props = &page.properties;
    GanttTask {
        id: page.id.clone(),
        name: extract(props, "Task/Project Name"),
        category: extract(props, "Category"),
        start_date: extract_date(props, "Start Date"),
        end_date: extract_date(props, "End Date"),
        status: extract(props, "Status"),
        priority: extract(props, "Priority"),
        assigned_to: extract(props, "Assigned To"),
        progress: extract(props, "Progress"),
        dependencies: extract(props, "Dependencies"),
        tags: extract(props, "Tags"),
        budget_cost: extract(props, "Budget/Cost"),
        one_time_cost: extract(props, "One-Time Cost"),
        monthly_cost: extract(props, "Monthly Cost"),
        blocked_by: extract(props, "Blocked by"),
        blocking: extract(props, "Blocking"),
    }
}

pub fn to_gantt_tasks(pages: &[NotionPage]) -> Vec<GanttTask> {
    pages.iter().map(to_gantt_task).collect()
}
