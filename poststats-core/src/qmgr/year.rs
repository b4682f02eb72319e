use crate::StatsError;
use chrono::{Datelike, NaiveDate};

/// Infers the year of a log file from a name shaped like `prefix-YYYYMMDD[.ext]`.
///
/// Names without a `-` are taken to be the live log and get `today`'s year. Rotated
/// names must carry a valid date after the first `-`.
pub fn resolve_year(filename: &str, today: NaiveDate) -> Result<i32, StatsError> {
    let Some((_, rest)) = filename.split_once('-') else {
        return Ok(today.year());
    };

    let segment = rest.split('-').next().unwrap_or_default();
    let date = segment.split('.').next().unwrap_or_default();

    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StatsError::malformed_filename(
            filename,
            format!("expected YYYYMMDD after '-', found '{date}'"),
        ));
    }

    NaiveDate::parse_from_str(date, "%Y%m%d")
        .map(|d| d.year())
        .map_err(|e| StatsError::malformed_filename(filename, format!("invalid date '{date}': {e}")))
}
