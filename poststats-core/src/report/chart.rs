use crate::constants::REPORT_TIMESTAMP_FORMAT;
use crate::report::reader::ReportRow;
use clap::ValueEnum;

/// Which report column to plot against time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Series {
    #[default]
    Count,
    Size,
}

impl Series {
    fn value(self, row: &ReportRow) -> u128 {
        match self {
            Series::Count => u128::from(row.message_count),
            Series::Size => row.total_size_bytes,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Series::Count => "messages",
            Series::Size => "bytes",
        }
    }
}

/// Renders `series` as a horizontal bar per row, oldest first, scaled so the largest
/// value spans `width` cells.
pub fn render_chart(rows: &[ReportRow], series: Series, width: usize) -> String {
    let mut rows = rows.to_vec();
    rows.sort();

    let total: u128 = rows.iter().map(|r| series.value(r)).sum();
    let mut out = format!(
        "Mail {label} over time\n\
         ==========================\n\
         rows: {} | total {label}: {}\n\n",
        rows.len(),
        total,
        label = series.label(),
    );

    if rows.is_empty() {
        out.push_str("<no data>\n");
        return out;
    }

    let max = rows.iter().map(|r| series.value(r)).max().unwrap_or(0).max(1);

    for row in &rows {
        let value = series.value(row);
        // non-zero values always get at least one cell
        let bars = match value {
            0 => 0,
            v => (((v as f64 / max as f64) * width as f64).round() as usize).max(1),
        };

        out.push_str(&format!(
            "  {} {:<width$} {:>12}\n",
            row.timestamp.format(REPORT_TIMESTAMP_FORMAT),
            "█".repeat(bars),
            value,
        ));
    }

    out
}
