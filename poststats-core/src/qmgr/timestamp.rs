use chrono::{Datelike, NaiveDateTime, ParseError};

/// Stand-in year while a stamp has none. A leap year, so `Feb 29` still parses.
const PLACEHOLDER_YEAR: i32 = 2000;

/// Month, day and time of day of a syslog stamp such as `Jun  5 10:22:31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearlessTimestamp(NaiveDateTime);

impl YearlessTimestamp {
    /// Parses `Mon dd HH:MM:SS`, with the day either zero- or space-padded.
    pub fn parse(stamp: &str) -> Result<Self, ParseError> {
        let normalized = stamp.split_whitespace().collect::<Vec<_>>().join(" ");

        NaiveDateTime::parse_from_str(
            &format!("{PLACEHOLDER_YEAR} {normalized}"),
            "%Y %b %d %H:%M:%S",
        )
        .map(Self)
    }

    /// Attaches `year`, keeping month, day and time of day.
    ///
    /// Returns `None` when the day does not exist in that year (Feb 29 outside a leap year).
    pub fn with_year(self, year: i32) -> Option<NaiveDateTime> {
        self.0.with_year(year)
    }
}
