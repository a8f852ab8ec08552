use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// Format of the date heading on a dining commons menu page.
/// ex. `Monday, January 2, 2006`
pub const HEADING_FORMAT: &str = "%A, %B %d, %Y";

/// The heading after the weekday.
const HEADING_DATE_FORMAT: &str = "%B %d, %Y";

/// A calendar day. Serializes as `yyyy-mm-dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    #[cfg(test)]
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses a heading like `Monday, January 2, 2006`.
    ///
    /// The weekday has to be a weekday name but isn't checked against the date.
    pub fn from_heading(text: &str) -> Result<Self, chrono::ParseError> {
        let text = text.trim();
        match text.split_once(',') {
            Some((weekday, date)) if weekday.trim().parse::<Weekday>().is_ok() => {
                NaiveDate::parse_from_str(date.trim(), HEADING_DATE_FORMAT).map(Self)
            }
            // reports why the whole heading doesn't fit
            _ => NaiveDate::parse_from_str(text, HEADING_FORMAT).map(Self),
        }
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Drops the time of day; the calendar day is taken in `t`'s own timezone.
pub fn date_from_timestamp<T: TimeZone>(t: &DateTime<T>) -> Date {
    Date(t.date_naive())
}

/// Loads a named timezone, falling back to UTC when the name is unknown.
pub fn timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|e| {
        log::warn!("Could not load timezone {name:?} ({e}), falling back to UTC");
        Tz::UTC
    })
}

/// The current calendar day in `tz`.
pub fn today(tz: Tz) -> Date {
    date_from_timestamp(&Utc::now().with_timezone(&tz))
}
