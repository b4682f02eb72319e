use crate::report::{ReportRow, Series, render_chart};
use chrono::NaiveDate;

fn row(h: u32, message_count: u64, total_size_bytes: u128) -> ReportRow {
    ReportRow {
        timestamp: NaiveDate::from_ymd_opt(2023, 6, 15)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap(),
        message_count,
        total_size_bytes,
    }
}

fn bar_len(line: &str) -> usize {
    line.chars().filter(|c| *c == '█').count()
}

#[test]
fn count_series_scales_to_largest_value() {
    // Arrange
    let rows = vec![row(11, 4, 10), row(10, 2, 99)];

    // Act
    let chart = render_chart(&rows, Series::Count, 20);

    // Assert
    let lines: Vec<_> = chart.lines().filter(|l| l.starts_with("  2023")).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("2023-06-15 10:00:00"), "rows must be sorted");
    assert_eq!(bar_len(lines[0]), 10);
    assert_eq!(bar_len(lines[1]), 20);
    assert!(chart.contains("total messages: 6"));
}

#[test]
fn size_series_plots_bytes() {
    // Arrange
    let rows = vec![row(10, 1, 1000), row(11, 1, 1)];

    // Act
    let chart = render_chart(&rows, Series::Size, 10);

    // Assert
    let lines: Vec<_> = chart.lines().filter(|l| l.starts_with("  2023")).collect();
    assert_eq!(bar_len(lines[0]), 10);
    assert_eq!(bar_len(lines[1]), 1, "small values keep one cell");
    assert!(chart.contains("total bytes: 1001"));
}

#[test]
fn zero_values_draw_no_bar() {
    let chart = render_chart(&[row(10, 0, 0)], Series::Count, 10);

    assert_eq!(bar_len(&chart), 0);
}

#[test]
fn empty_input_renders_placeholder() {
    let chart = render_chart(&[], Series::Count, 10);

    assert!(chart.contains("<no data>"));
    assert!(chart.contains("rows: 0"));
}
