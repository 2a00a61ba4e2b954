use std::collections::BTreeMap;
use std::fmt::Write;

use crate::model::gantt::GanttTask;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Tasks per category label, sorted by label.
pub fn count_by_category(tasks: &[GanttTask]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        let label = task.category_label().unwrap_or(UNCATEGORIZED);
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

pub fn format_category_report(counts: &BTreeMap<String, usize>) -> String {
    let mut out = String::from("Tasks by category:\n");
    for (category, count) in counts {
        let _ = writeln!(out, "  {category}: {count}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::FieldValue;

    fn task(category: Option<&str>) -> GanttTask {
        GanttTask {
            id: "x".into(),
            category: category.map(|c| FieldValue::Text(c.into())),
            ..Default::default()
        }
    }

    #[test]
    fn absent_category_is_uncategorized() {
        let tasks = vec![
            task(Some("Build")),
            task(None),
            task(Some("Build")),
            task(Some("")),
            task(Some("Research")),
        ];
        let counts = count_by_category(&tasks);

        assert_eq!(counts["Build"], 2);
        assert_eq!(counts[UNCATEGORIZED], 2);
        assert_eq!(counts["Research"], 1);
        assert_eq!(counts.values().sum::<usize>(), tasks.len());
    }

    #[test]
    fn report_lists_categories_alphabetically() {
        let counts = count_by_category(&[task(Some("Ops")), task(None), task(Some("Build"))]);
        assert_eq!(
            format_category_report(&counts),
            "Tasks by category:\n  Build: 1\n  Ops: 1\n  Uncategorized: 1\n"
        );
    }

    #[test]
    fn empty_report() {
        let counts = count_by_category(&[]);
        assert!(counts.is_empty());
        assert_eq!(format_category_report(&counts), "Tasks by category:\n");
    }
}
