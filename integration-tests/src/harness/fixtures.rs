use chrono::NaiveDate;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds a queue-manager acceptance line for `queue`.
pub fn qmgr_line(queue: &str, stamp: &str, id: &str, size: u64) -> String {
    format!("{stamp} mx1 {queue}/qmgr[2101]: {id}: from=<sender@example.org>, size={size}, nrcpt=1 (queue active)")
}

/// Scratch directory holding log files and reports for one test.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_plain(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, lines.join("\n") + "\n").unwrap();
        path
    }

    pub fn write_gzip(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.path(name);
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder
            .write_all((lines.join("\n") + "\n").as_bytes())
            .unwrap();
        encoder.finish().unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}
