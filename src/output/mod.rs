//! Report rendering
//! Console, JSON and Markdown formatters over a score report

pub mod formatter;
pub mod report;

pub use formatter::{ReportGenerator, OutputFormatter};
