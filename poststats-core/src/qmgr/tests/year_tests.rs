use crate::StatsError;
use crate::qmgr::resolve_year;
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

#[test]
fn rotated_gzip_name_yields_its_year() {
    assert_eq!(resolve_year("maillog-20230615.gz", today()).unwrap(), 2023);
}

#[test]
fn rotated_plain_name_yields_its_year() {
    assert_eq!(resolve_year("mail-20230615.log", today()).unwrap(), 2023);
    assert_eq!(resolve_year("maillog-19991231", today()).unwrap(), 1999);
}

#[test]
fn multiple_extensions_are_stripped() {
    assert_eq!(resolve_year("maillog-20210102.log.gz", today()).unwrap(), 2021);
}

#[test]
fn name_without_dash_uses_current_year() {
    assert_eq!(resolve_year("maillog", today()).unwrap(), 2026);
    assert_eq!(resolve_year("mail.log.gz", today()).unwrap(), 2026);
}

#[test]
fn malformed_date_segment_is_an_error() {
    for name in ["maillog-2023.gz", "maillog-abcdefgh", "mail-log-20230615", "maillog-"] {
        // Act
        let result = resolve_year(name, today());

        // Assert
        assert!(
            matches!(result, Err(StatsError::MalformedFilename { ref filename, .. }) if filename == name),
            "expected MalformedFilename for {name}, got {result:?}"
        );
    }
}

#[test]
fn impossible_calendar_date_is_an_error() {
    let result = resolve_year("maillog-20231340.gz", today());

    assert!(matches!(result, Err(StatsError::MalformedFilename { .. })));
}
