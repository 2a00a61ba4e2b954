pub mod gantt;
pub mod property;
