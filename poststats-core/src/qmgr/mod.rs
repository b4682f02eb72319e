//! Queue-manager line handling.
//!
//! A postfix queue manager logs one line per message it accepts into a queue:
//!
//! ```text
//! Jun 15 10:22:31 host postfix/qmgr[123]: ABC123: from=<a@b.com>, size=4096, nrcpt=1 (queue active)
//! ```
//!
//! Syslog stamps carry no year, so extraction yields a [`YearlessTimestamp`] and the
//! year is supplied afterwards from the log file name (see [`resolve_year`]).

mod extract;
mod timestamp;
mod year;

#[cfg(test)]
mod tests;

pub use extract::{DeliveryRecord, ExtractedLine, LineClassifier, extract};
pub use timestamp::YearlessTimestamp;
pub use year::resolve_year;
