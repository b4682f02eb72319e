//! Log Processing Pipeline
//!
//! Lines flow from a (possibly gzip-compressed) log file through the queue-manager
//! classifier, get their year corrected from the file name, and are reduced into
//! one bucket per second:
//!
//! open_log
//! process
//! DeliveryRecord
//! aggregate
//! Aggregation
//!
//! Every stage fails fast. A single malformed queue-manager line aborts the run so
//! that no report is ever built from a partial read.

mod aggregate;
mod process;
mod source;

#[cfg(test)]
mod tests;

pub use aggregate::{Aggregation, Bucket, aggregate};
pub use process::{process, process_file};
pub use source::{log_file_name, open_log};
