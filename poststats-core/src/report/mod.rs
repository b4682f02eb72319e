//! CSV report output and the chart built from it.
//!
//! Rows have no header and look like `2023-06-15 10:22:31,2,6144`: timestamp,
//! message count, total size in bytes. The reader parses exactly what the writer
//! emits, so a report can be charted (or re-aggregated) later.

mod chart;
mod reader;
mod writer;

#[cfg(test)]
mod tests;

pub use chart::{Series, render_chart};
pub use reader::{ReportRow, read_report, read_report_from};
pub use writer::{WriteMode, write_report, write_rows};
