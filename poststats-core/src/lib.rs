pub mod cli;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod qmgr;
pub mod report;

pub use error::StatsError;
