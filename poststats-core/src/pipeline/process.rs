use crate::StatsError;
use crate::pipeline::source::{log_file_name, open_log};
use crate::qmgr::{DeliveryRecord, LineClassifier, resolve_year};
use chrono::NaiveDate;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info};

/// Reads every line of `reader` and returns the queue-manager records for `queue`, in
/// file order, with timestamps placed in `year`.
///
/// `source` only labels read errors. The full record list is held in memory.
pub fn process<R: BufRead>(
    mut reader: R,
    queue: &str,
    year: i32,
    source: &Path,
) -> Result<Vec<DeliveryRecord>, StatsError> {
    let classifier = LineClassifier::new(queue);
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut lines = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| StatsError::io("failed to read", source, e))?;
        if read == 0 {
            break;
        }
        lines += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        let Some(extracted) = classifier.extract(line)? else {
            continue;
        };

        let record = extracted.into_record(year).ok_or_else(|| {
            StatsError::malformed_line(line, format!("date does not exist in {year}"))
        })?;
        records.push(record);
    }

    debug!(lines, records = records.len(), queue, "log stream processed");
    Ok(records)
}

/// Opens `path`, infers its year from the file name and processes it.
pub fn process_file(
    path: &Path,
    queue: &str,
    today: NaiveDate,
) -> Result<(i32, Vec<DeliveryRecord>), StatsError> {
    let year = resolve_year(&log_file_name(path), today)?;
    info!(path = %path.display(), year, queue, "processing log file");

    let reader = open_log(path)?;
    let records = process(reader, queue, year, path)?;

    Ok((year, records))
}
