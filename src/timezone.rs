//! Timezone identifier resolution.
//!
//! Identifiers are IANA zone names (e.g. `Europe/Amsterdam`) looked up in the `chrono-tz`
//! database when the `tz` feature is enabled. Without it, only `UTC` is known.

use crate::types::CalendarDate;
use crate::{Error, Result};
#[cfg(feature = "tz")]
use chrono::{NaiveTime, Offset, TimeZone};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Resolves a timezone identifier to its UTC offset in fractional days.
///
/// The offset is the one in effect at 0:00 UTC of `date`, so daylight saving time is taken
/// into account. `None`, an empty string or whitespace mean UTC.
///
/// # Errors
/// Returns `UnknownTimezone` if the identifier is not in the timezone database.
///
/// # Example
/// ```
/// # use solar_events::{CalendarDate, timezone::utc_offset_days};
/// let date = CalendarDate::new(2024, 1, 15).unwrap();
/// assert_eq!(utc_offset_days(None, date).unwrap(), 0.0);
/// # #[cfg(feature = "tz")]
/// assert_eq!(utc_offset_days(Some("Asia/Kolkata"), date).unwrap(), 5.5 / 24.0);
/// ```
pub fn utc_offset_days(timezone: Option<&str>, date: CalendarDate) -> Result<f64> {
    let Some(identifier) = timezone.map(str::trim).filter(|id| !id.is_empty()) else {
        return Ok(0.0);
    };
    let seconds = offset_seconds(identifier, date)?;
    Ok(f64::from(seconds) / SECONDS_PER_DAY)
}

#[cfg(feature = "tz")]
fn offset_seconds(identifier: &str, date: CalendarDate) -> Result<i32> {
    let tz: chrono_tz::Tz = identifier
        .parse()
        .map_err(|_| Error::unknown_timezone())?;
    let reference = date.naive_date().and_time(NaiveTime::MIN);
    Ok(tz.offset_from_utc_datetime(&reference).fix().local_minus_utc())
}

#[cfg(not(feature = "tz"))]
fn offset_seconds(identifier: &str, _date: CalendarDate) -> Result<i32> {
    if identifier.eq_ignore_ascii_case("UTC") {
        Ok(0)
    } else {
        Err(Error::unknown_timezone())
    }
}
