use crate::StatsError;
use crate::constants::REPORT_TIMESTAMP_FORMAT;
use crate::pipeline::{Aggregation, Bucket};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate or create the destination.
    Create,
    /// Append to the destination, creating it if absent.
    Append,
}

/// Writes one row per bucket, oldest first, flushing after every row.
pub fn write_report(
    aggregation: &Aggregation,
    destination: &Path,
    mode: WriteMode,
) -> Result<(), StatsError> {
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Create => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };

    let file = options
        .open(destination)
        .map_err(|e| StatsError::io("failed to open report", destination, e))?;

    write_rows(aggregation, BufWriter::new(file))
        .map_err(|e| StatsError::io("failed to write report", destination, e))
}

pub fn write_rows<W: Write>(aggregation: &Aggregation, mut out: W) -> std::io::Result<()> {
    for bucket in aggregation.buckets() {
        writeln!(out, "{}", format_row(bucket))?;
        out.flush()?;
    }
    Ok(())
}

fn format_row(bucket: &Bucket) -> String {
    format!(
        "{},{},{}",
        bucket.timestamp.format(REPORT_TIMESTAMP_FORMAT),
        bucket.message_count,
        bucket.total_size_bytes
    )
}
