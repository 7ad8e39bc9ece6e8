//! Calendar-day parsing and the default "today" reference.
//!
//! Everything downstream of this module works on [`NaiveDate`]: a time of day
//! never reaches the arithmetic, so two instants on the same calendar day
//! always compare equal.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::DayError;

/// Formats accepted for naive (offset-less) datetimes, most specific first.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO 8601 date or datetime string down to its calendar day.
///
/// Accepted inputs:
///
/// - `YYYY-MM-DD`
/// - a naive datetime such as `YYYY-MM-DDTHH:MM:SS` (fractional seconds allowed)
/// - an RFC 3339 datetime with offset, e.g. `2023-12-20T23:30:00-05:00`
///
/// For datetimes the calendar day is the one written in the string (the
/// wall-clock date in the supplied offset), not the UTC date.
///
/// # Errors
///
/// Returns [`DayError::InvalidDateFormat`] for anything else, including
/// impossible dates like `2023-02-30`.
///
/// # Examples
///
/// ```
/// use day_engine::calendar::parse_calendar_date;
///
/// let day = parse_calendar_date("2023-12-20T23:59:59+09:00").unwrap();
/// assert_eq!(day.to_string(), "2023-12-20");
/// ```
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, DayError> {
    let trimmed = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| DayError::InvalidDateFormat(format!("'{}'", s)))
}

/// The current calendar day, used when a caller supplies no reference date.
///
/// With `timezone = None` this is the host's local date. With an IANA name it
/// is the date in that zone at this instant, which is what a device set to
/// that zone would show.
///
/// # Errors
///
/// Returns [`DayError::InvalidTimezone`] if the name is not a known IANA zone.
pub fn today(timezone: Option<&str>) -> Result<NaiveDate, DayError> {
    match timezone {
        None => Ok(Local::now().date_naive()),
        Some(name) => {
            let tz = parse_timezone(name)?;
            Ok(Utc::now().with_timezone(&tz).date_naive())
        }
    }
}

/// Resolve an optional reference string to a calendar day, falling back to
/// [`today`].
pub fn reference_or_today(
    reference: Option<&str>,
    timezone: Option<&str>,
) -> Result<NaiveDate, DayError> {
    match reference {
        Some(s) => parse_calendar_date(s),
        None => today(timezone),
    }
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz, DayError> {
    s.parse::<Tz>()
        .map_err(|_| DayError::InvalidTimezone(format!("'{}'", s)))
}
