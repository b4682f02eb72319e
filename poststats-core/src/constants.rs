/// Lines carrying any of these markers are queue-manager bookkeeping, not accepted deliveries.
pub const EXCLUSION_MARKERS: &[&str] = &["removed", "warning: ", "status=expired", "skipped"];

/// Suffix appended to the queue name to recognise queue-manager lines.
pub const QMGR_SUFFIX: &str = "/qmgr";

/// Width of the syslog timestamp prefix, e.g. `Jun  5 10:22:31`.
pub const SYSLOG_STAMP_LEN: usize = 15;

/// Report timestamp layout. Written by the report writer, parsed back by the reader.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DEFAULT_OUTPUT: &str = "output.csv";
pub const DEFAULT_CHART_WIDTH: usize = 50;
