mod fixtures;
pub mod tracing;

pub use fixtures::{LogDir, qmgr_line, today};
pub use self::tracing::{CapturedEvent, init_test_tracing};
