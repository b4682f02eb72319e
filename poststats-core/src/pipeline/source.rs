use crate::StatsError;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opens a log file, decoding it as gzip when the name ends in `.gz`.
///
/// Every member of a concatenated gzip file is read, not just the first.
pub fn open_log(path: &Path) -> Result<Box<dyn BufRead>, StatsError> {
    let file = File::open(path).map_err(|e| StatsError::io("failed to open", path, e))?;

    let compressed = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    if compressed {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Base name used for year inference. Directory components may contain `-` themselves.
pub fn log_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
