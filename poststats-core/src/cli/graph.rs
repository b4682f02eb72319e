use crate::StatsError;
use crate::report::{Series, read_report, render_chart};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub series: Series,
    pub width: usize,
}

pub fn render_report(config: &GraphConfig) -> Result<String, StatsError> {
    let rows = read_report(&config.input)?;
    info!(rows = rows.len(), series = ?config.series, "charting report");

    Ok(render_chart(&rows, config.series, config.width))
}

pub fn run_graph(config: &GraphConfig) -> Result<(), StatsError> {
    let chart = render_report(config)?;

    match &config.output {
        Some(path) => {
            fs::write(path, chart).map_err(|e| StatsError::io("failed to write chart", path, e))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(chart.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| StatsError::io("failed to write chart", "<stdout>", e))
        }
    }
}
