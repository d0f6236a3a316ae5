//! Output formatting for scenario reports.

pub mod report;

pub use report::{format_report_summary, format_report_table};
