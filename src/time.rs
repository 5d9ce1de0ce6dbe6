//! Julian day conversions and UTC instant assembly.
//!
//! The Julian day algorithm follows Meeus, "Astronomical Algorithms", as used by the NOAA
//! solar calculator. Calendar arithmetic (month and year rollover) is left to chrono.

#![allow(clippy::unreadable_literal)]

use crate::error::check_timezone_offset;
use crate::math::floor;
use crate::types::{CalendarDate, MinutesUtc};
use crate::{Error, Result};
use chrono::{DateTime, Days, NaiveDate, Utc};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Last Julian day of the Julian calendar; 1582-10-15 (Gregorian) starts at 2299160.5.
const GREGORIAN_REFORM_JD: f64 = 2_299_160.4999999;

/// Continuous count of days since the Julian epoch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw Julian day value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Calculates the Julian day at 0:00 of a calendar date, shifted by a timezone offset.
    ///
    /// The offset (fractional days) is added to the day of month before conversion. The
    /// Gregorian correction is applied only past 1582-10-15; earlier dates use the Julian
    /// calendar formula.
    ///
    /// The offset is not checked here; a non-finite offset yields a non-finite day. Use
    /// [`JulianDay::from_ymd`] for validated input.
    ///
    /// # Example
    /// ```
    /// # use solar_events::{CalendarDate, time::JulianDay};
    /// let date = CalendarDate::new(2000, 1, 1).unwrap();
    /// assert_eq!(JulianDay::from_calendar(date, 0.0).value(), 2_451_544.5);
    /// assert_eq!(JulianDay::from_calendar(date, 0.5).value(), 2_451_545.0);
    /// ```
    #[must_use]
    pub fn from_calendar(date: CalendarDate, timezone_offset_days: f64) -> Self {
        Self(calculate_julian_day(
            date.year(),
            date.month(),
            f64::from(date.day()) + timezone_offset_days,
        ))
    }

    /// Validates year, month, day and offset, then calculates the Julian day.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist, and
    /// `InvalidTimezoneOffset` if the offset is not finite or exceeds one day.
    pub fn from_ymd(year: i32, month: u32, day: u32, timezone_offset_days: f64) -> Result<Self> {
        let date = CalendarDate::new(year, month, day)?;
        let offset = check_timezone_offset(timezone_offset_days)?;
        Ok(Self::from_calendar(date, offset))
    }

    /// Gets the raw Julian day value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Converts to Julian centuries since J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn to_century(&self) -> JulianCentury {
        JulianCentury((self.0 - J2000_JDN) / DAYS_PER_CENTURY)
    }

    /// Adds (possibly fractional) days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }
}

/// Julian centuries since 2000-01-01 12:00 UTC.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianCentury(f64);

impl JulianCentury {
    /// Wraps a raw Julian century value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Gets the raw Julian century value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Converts back to a Julian day.
    ///
    /// JD = JC * 36525 + 2451545.0
    #[must_use]
    pub fn to_julian_day(&self) -> JulianDay {
        JulianDay(self.0 * DAYS_PER_CENTURY + J2000_JDN)
    }
}

fn calculate_julian_day(year: i32, month: u32, day: f64) -> f64 {
    // January and February count as months 13 and 14 of the previous year
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);
    let m = f64::from(m);

    let mut jd = floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + day - 1524.5;

    if jd > GREGORIAN_REFORM_JD {
        let a = floor(y / 100.0);
        jd += 2.0 - a + floor(a / 4.0);
    }

    jd
}

/// Turns minutes since 0:00 UTC of `base_date` into a UTC instant.
///
/// The value is split into a day offset and a wall-clock time (see
/// [`MinutesUtc::clock_time`]); the day offset is then applied through chrono, which handles
/// month and year rollover.
///
/// # Errors
/// Returns `InvalidDate` if the minutes are not finite or the shifted date falls outside
/// chrono's supported range.
///
/// # Example
/// ```
/// # use solar_events::{CalendarDate, MinutesUtc, time::assemble};
/// let new_years_eve = CalendarDate::new(2023, 12, 31).unwrap();
/// let instant = assemble(MinutesUtc::from_minutes(1500.0), new_years_eve).unwrap();
/// assert_eq!(instant.to_rfc3339(), "2024-01-01T01:00:00+00:00");
/// ```
pub fn assemble(minutes: MinutesUtc, base_date: CalendarDate) -> Result<DateTime<Utc>> {
    if !minutes.minutes().is_finite() {
        return Err(Error::invalid_date("event time is not finite"));
    }

    let clock = minutes.clock_time();
    let date = shift_days(base_date.naive_date(), clock.day_offset())?;

    date.and_hms_opt(clock.hour(), clock.minute(), clock.second())
        .map(|naive| naive.and_utc())
        .ok_or(Error::invalid_date("time of day is out of range"))
}

fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let count = Days::new(days.unsigned_abs());
    let shifted = if days < 0 {
        date.checked_sub_days(count)
    } else {
        date.checked_add_days(count)
    };
    shifted.ok_or(Error::invalid_date(
        "date is outside the supported calendar range",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    const EPSILON: f64 = 1e-10;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_specific_julian_days() {
        // Unix epoch: 1970-01-01 00:00:00 UTC
        let unix_epoch = JulianDay::from_calendar(date(1970, 1, 1), 0.0);
        assert!((unix_epoch.value() - 2_440_587.5).abs() < 1e-6);

        // Y2K: 2000-01-01 00:00:00 UTC
        let y2k = JulianDay::from_calendar(date(2000, 1, 1), 0.0);
        assert!((y2k.value() - 2_451_544.5).abs() < 1e-6);

        // J2000.0 is 12 hours later
        let j2000 = JulianDay::from_calendar(date(2000, 1, 1), 0.5);
        assert!(j2000.to_century().value().abs() < EPSILON);
    }

    #[test]
    fn test_timezone_offset_is_added_to_day() {
        let utc = JulianDay::from_calendar(date(2024, 7, 1), 0.0);
        let amsterdam = JulianDay::from_calendar(date(2024, 7, 1), 2.0 / 24.0);
        assert!((amsterdam.value() - utc.value() - 2.0 / 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_gregorian_calendar_correction() {
        // October 4, 1582 (Julian) was followed by October 15, 1582 (Gregorian)
        let julian = JulianDay::from_calendar(date(1582, 10, 4), 0.0);
        let gregorian = JulianDay::from_calendar(date(1582, 10, 15), 0.0);

        assert_eq!(julian.value(), 2_299_159.5);
        assert_eq!(gregorian.value(), 2_299_160.5);
        assert!((gregorian.value() - julian.value() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_julian_calendar_branch_before_reform() {
        // Meeus example 7.b: 333-01-27 12:00 (Julian calendar) is JD 1842713.0
        let jd = JulianDay::from_calendar(date(333, 1, 27), 0.5);
        assert!((jd.value() - 1_842_713.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_ymd_validation() {
        assert!(JulianDay::from_ymd(2024, 2, 29, 0.0).is_ok());
        assert!(JulianDay::from_ymd(2023, 2, 29, 0.0).is_err());
        assert!(JulianDay::from_ymd(2024, 13, 1, 0.0).is_err());
        assert!(JulianDay::from_ymd(2024, 0, 1, 0.0).is_err());
        assert!(JulianDay::from_ymd(2024, 6, 31, 0.0).is_err());
        assert!(JulianDay::from_ymd(2024, 3, 20, f64::NAN).is_err());
        assert!(JulianDay::from_ymd(2024, 3, 20, f64::INFINITY).is_err());
        assert_eq!(
            JulianDay::from_ymd(2024, 3, 20, 1.5),
            Err(Error::InvalidTimezoneOffset { value: 1.5 })
        );
    }

    #[test]
    fn test_century_round_trip() {
        for value in [-20.0, -1.5, -0.123_456, 0.0, 0.244_316, 3.75, 50.0] {
            let century = JulianCentury::new(value);
            let back = century.to_julian_day().to_century();
            assert!(
                (back.value() - value).abs() < 1e-12,
                "round trip of {value} gave {}",
                back.value()
            );
        }

        let jd = JulianDay::new(2_460_389.5);
        assert!((jd.to_century().to_julian_day().value() - jd.value()).abs() < 1e-6);
    }

    #[test]
    fn test_add_days() {
        let jd = JulianDay::new(2_451_544.5).add_days(0.25);
        assert_eq!(jd.value(), 2_451_544.75);
    }

    #[test]
    fn test_assemble_same_day() {
        let instant = assemble(MinutesUtc::from_minutes(361.75), date(2024, 3, 20)).unwrap();
        assert_eq!(instant.date_naive(), date(2024, 3, 20).naive_date());
        assert_eq!(
            (instant.hour(), instant.minute(), instant.second()),
            (6, 1, 45)
        );
    }

    #[test]
    fn test_assemble_rolls_over_month_and_year() {
        let instant = assemble(MinutesUtc::from_minutes(-30.0), date(2024, 3, 1)).unwrap();
        assert_eq!((instant.month(), instant.day()), (2, 29));
        assert_eq!((instant.hour(), instant.minute()), (23, 30));

        let instant = assemble(MinutesUtc::from_minutes(1500.0), date(2023, 12, 31)).unwrap();
        assert_eq!((instant.year(), instant.month(), instant.day()), (2024, 1, 1));
        assert_eq!((instant.hour(), instant.minute()), (1, 0));
    }

    #[test]
    fn test_assemble_rejects_non_finite() {
        assert!(assemble(MinutesUtc::from_minutes(f64::NAN), date(2024, 1, 1)).is_err());
        assert!(assemble(MinutesUtc::from_minutes(f64::INFINITY), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_assemble_outside_calendar_range() {
        let last = CalendarDate::from(NaiveDate::MAX);
        assert!(assemble(MinutesUtc::from_minutes(1500.0), last).is_err());
    }
}
