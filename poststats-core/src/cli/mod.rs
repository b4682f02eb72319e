mod graph;
mod stats;


pub use graph::{GraphConfig, render_report, run_graph};
pub use stats::{RunSummary, StatsConfig, run_stats};

use crate::constants::{DEFAULT_CHART_WIDTH, DEFAULT_OUTPUT};
use crate::report::{Series, WriteMode};
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::error;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Aggregate accepted messages of a mail log into a CSV report
    Stats(StatsArgs),

    /// Chart a CSV report produced by `stats`
    Graph(GraphArgs),
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Queue to process (the syslog tag before `/qmgr`, e.g. postfix)
    pub queue: String,

    /// Log file to process; files ending in .gz are decompressed
    pub filename: PathBuf,

    /// CSV report to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT, env = "POSTSTATS_OUTPUT")]
    pub output: PathBuf,

    /// Append rows to the report instead of replacing it
    #[arg(long)]
    pub append: bool,
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// CSV report to chart
    pub input: PathBuf,

    /// File to write the chart to (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Column to plot against time
    #[arg(long, value_enum, default_value_t = Series::Count)]
    pub series: Series,

    /// Width of the longest bar, in cells
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    pub width: usize,
}

impl From<StatsArgs> for StatsConfig {
    fn from(args: StatsArgs) -> Self {
        Self {
            queue: args.queue,
            input: args.filename,
            output: args.output,
            mode: if args.append {
                WriteMode::Append
            } else {
                WriteMode::Create
            },
        }
    }
}

impl From<GraphArgs> for GraphConfig {
    fn from(args: GraphArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
            series: args.series,
            width: args.width,
        }
    }
}

pub fn run(cmd: Command) -> Result<()> {
    match cmd {
        Command::Stats(args) => {
            let config = StatsConfig::from(args);
            run_stats(&config, Local::now().date_naive())
                .with_context(|| format!("failed to build report from {}", config.input.display()))?;
            Ok(())
        }
        Command::Graph(args) => {
            let config = GraphConfig::from(args);
            run_graph(&config)
                .with_context(|| format!("failed to chart {}", config.input.display()))
        }
    }
}

/// Logs a fatal error with its cause chain and prints it on stderr.
pub fn report_failure(err: &anyhow::Error) {
    let chain = format!("{err:#}");
    error!(error = %chain, "poststats failed");
    eprintln!("poststats error: {chain}");
}
