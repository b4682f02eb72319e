use crate::StatsError;
use crate::pipeline::{aggregate, process_file};
use crate::report::{WriteMode, write_report};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub queue: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: WriteMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub year: i32,
    pub records: usize,
    pub buckets: usize,
}

/// Processes one log file and writes its report.
///
/// The report is opened only once the whole log has been read and aggregated, so a
/// malformed line leaves any existing report untouched.
pub fn run_stats(config: &StatsConfig, today: NaiveDate) -> Result<RunSummary, StatsError> {
    let (year, records) = process_file(&config.input, &config.queue, today)?;
    let aggregation = aggregate(&records);

    write_report(&aggregation, &config.output, config.mode)?;

    let summary = RunSummary {
        year,
        records: records.len(),
        buckets: aggregation.len(),
    };

    info!(
        records = summary.records,
        buckets = summary.buckets,
        year,
        output = %config.output.display(),
        mode = ?config.mode,
        "report written"
    );

    Ok(summary)
}
