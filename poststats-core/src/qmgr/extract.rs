use crate::StatsError;
use crate::constants::{EXCLUSION_MARKERS, QMGR_SUFFIX, SYSLOG_STAMP_LEN};
use crate::qmgr::timestamp::YearlessTimestamp;
use chrono::NaiveDateTime;

/// One accepted message, with its timestamp corrected to a calendar year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRecord {
    pub message_id: String,
    pub timestamp: NaiveDateTime,
    pub size_bytes: u64,
}

/// Fields pulled out of a matching line before the year is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLine {
    pub message_id: String,
    pub timestamp: YearlessTimestamp,
    pub size_bytes: u64,
}

impl ExtractedLine {
    /// Returns `None` when the month/day does not exist in `year`.
    pub fn into_record(self, year: i32) -> Option<DeliveryRecord> {
        Some(DeliveryRecord {
            timestamp: self.timestamp.with_year(year)?,
            message_id: self.message_id,
            size_bytes: self.size_bytes,
        })
    }
}

/// Decides which lines are queue-manager acceptances for one queue and extracts them.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    tag: String,
}

impl LineClassifier {
    pub fn new(queue: &str) -> Self {
        Self {
            tag: format!("{queue}{QMGR_SUFFIX}"),
        }
    }

    /// True for `<queue>/qmgr` lines that carry none of the exclusion markers.
    pub fn matches(&self, line: &str) -> bool {
        line.contains(&self.tag) && !EXCLUSION_MARKERS.iter().any(|m| line.contains(m))
    }

    /// Extracts message id, stamp and size from a matching line.
    ///
    /// Lines that do not match yield `Ok(None)`. A matching line that does not have the
    /// expected shape is an error carrying the raw line.
    pub fn extract(&self, line: &str) -> Result<Option<ExtractedLine>, StatsError> {
        if !self.matches(line) {
            return Ok(None);
        }

        if line.len() < SYSLOG_STAMP_LEN {
            return Err(StatsError::malformed_line(
                line,
                "line shorter than its timestamp",
            ));
        }
        let stamp = line.get(..SYSLOG_STAMP_LEN).ok_or_else(|| {
            StatsError::malformed_line(line, "non-ASCII text inside the timestamp")
        })?;
        let timestamp = YearlessTimestamp::parse(stamp).map_err(|e| {
            StatsError::malformed_line(line, format!("invalid timestamp '{stamp}': {e}"))
        })?;

        let (_, remainder) = line
            .split_once(": ")
            .ok_or_else(|| StatsError::malformed_line(line, "missing ': ' separator"))?;

        let mut parts = remainder.split(": ");
        let (Some(message_id), Some(fields)) = (parts.next(), parts.next()) else {
            return Err(StatsError::malformed_line(
                line,
                "expected '<message id>: <fields>'",
            ));
        };
        if message_id.is_empty() {
            return Err(StatsError::malformed_line(line, "empty message id"));
        }

        let fields: Vec<&str> = fields.split(',').collect();
        if fields.len() < 3 {
            return Err(StatsError::malformed_line(
                line,
                format!(
                    "expected at least 3 comma-separated fields, found {}",
                    fields.len()
                ),
            ));
        }

        let size_field = fields[1];
        let (_, size) = size_field.rsplit_once('=').ok_or_else(|| {
            StatsError::malformed_line(line, format!("size field '{size_field}' has no '='"))
        })?;
        let size_bytes = size.parse::<u64>().map_err(|e| {
            StatsError::malformed_line(line, format!("invalid size '{size}': {e}"))
        })?;

        Ok(Some(ExtractedLine {
            message_id: message_id.to_string(),
            timestamp,
            size_bytes,
        }))
    }
}

/// One-off form of [`LineClassifier::extract`].
pub fn extract(line: &str, queue: &str) -> Result<Option<ExtractedLine>, StatsError> {
    LineClassifier::new(queue).extract(line)
}
