use crate::StatsError;
use crate::constants::REPORT_TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One parsed report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReportRow {
    pub timestamp: NaiveDateTime,
    pub message_count: u64,
    pub total_size_bytes: u128,
}

pub fn read_report(path: &Path) -> Result<Vec<ReportRow>, StatsError> {
    let file = File::open(path).map_err(|e| StatsError::io("failed to open report", path, e))?;
    read_report_from(BufReader::new(file), path)
}

/// Parses report rows from `reader`. Blank lines are skipped.
pub fn read_report_from<R: BufRead>(reader: R, source: &Path) -> Result<Vec<ReportRow>, StatsError> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| StatsError::io("failed to read report", source, e))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        rows.push(parse_row(line).map_err(|reason| StatsError::MalformedReportRow {
            line_number: idx + 1,
            row: line.to_string(),
            reason,
        })?);
    }

    Ok(rows)
}

fn parse_row(line: &str) -> Result<ReportRow, String> {
    let columns: Vec<&str> = line.split(',').collect();
    let [timestamp, count, size] = columns.as_slice() else {
        return Err(format!("expected 3 columns, found {}", columns.len()));
    };

    let timestamp = NaiveDateTime::parse_from_str(timestamp, REPORT_TIMESTAMP_FORMAT)
        .map_err(|e| format!("invalid timestamp '{timestamp}': {e}"))?;
    let message_count = count
        .parse::<u64>()
        .map_err(|e| format!("invalid count '{count}': {e}"))?;
    let total_size_bytes = size
        .parse::<u128>()
        .map_err(|e| format!("invalid size '{size}': {e}"))?;

    Ok(ReportRow {
        timestamp,
        message_count,
        total_size_bytes,
    })
}
