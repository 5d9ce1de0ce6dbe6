//! Core data types for solar event calculations.

use crate::error::{check_depression_magnitude, check_finite_coordinate};
use crate::math::trunc;
use crate::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Latitudes are saturated to ±89.8° before use; the hour-angle formula divides by cos(latitude).
pub const MAX_LATITUDE: f64 = 89.8;

/// A calendar date validated against the proleptic Gregorian calendar.
///
/// # Example
/// ```
/// # use solar_events::CalendarDate;
/// let date = CalendarDate::new(2024, 2, 29).unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
///
/// assert!(CalendarDate::new(2023, 2, 29).is_err());
/// assert!(CalendarDate::new(2024, 13, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a calendar date from year, month and day.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(Error::invalid_date("day is out of range for month"))
    }

    /// Gets the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Gets the month (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Gets the underlying chrono date.
    #[must_use]
    pub const fn naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Observer location on Earth.
///
/// Latitude is saturated to ±[`MAX_LATITUDE`], not rejected. Longitude is positive east and
/// unrestricted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, clamping the latitude into ±89.8°.
    ///
    /// # Errors
    /// Returns `NonFiniteCoordinate` if either value is NaN or infinite.
    ///
    /// # Example
    /// ```
    /// # use solar_events::GeoCoordinate;
    /// let pole = GeoCoordinate::new(95.0, 10.0).unwrap();
    /// assert_eq!(pole.latitude(), 89.8);
    /// assert_eq!(pole.longitude(), 10.0);
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let latitude = check_finite_coordinate(latitude)?;
        let longitude = check_finite_coordinate(longitude)?;
        Ok(Self {
            latitude: latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE),
            longitude,
        })
    }

    /// Gets the (clamped) latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees, positive east.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Angle of the sun below the horizon that defines an event, in degrees.
///
/// The sign picks the side of solar noon: positive values are morning ("begin") events,
/// negative values are evening ("end") events. The magnitude is what enters the hour-angle
/// formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Depression(f64);

impl Depression {
    /// Sunrise: upper limb on the horizon, including standard refraction.
    pub const SUNRISE: Self = Self(0.833);
    /// Sunset: upper limb on the horizon, including standard refraction.
    pub const SUNSET: Self = Self(-0.833);
    /// Start of morning civil twilight (6° below the horizon).
    pub const CIVIL_TWILIGHT_BEGIN: Self = Self(6.0);
    /// End of evening civil twilight.
    pub const CIVIL_TWILIGHT_END: Self = Self(-6.0);
    /// Start of morning nautical twilight (12° below the horizon).
    pub const NAUTICAL_TWILIGHT_BEGIN: Self = Self(12.0);
    /// End of evening nautical twilight.
    pub const NAUTICAL_TWILIGHT_END: Self = Self(-12.0);
    /// Start of morning astronomical twilight (18° below the horizon).
    pub const ASTRONOMICAL_TWILIGHT_BEGIN: Self = Self(18.0);
    /// End of evening astronomical twilight.
    pub const ASTRONOMICAL_TWILIGHT_END: Self = Self(-18.0);

    /// Creates a custom morning-side depression.
    ///
    /// # Errors
    /// Returns `InvalidDepression` if the magnitude is outside 0 to 90 degrees.
    ///
    /// # Example
    /// ```
    /// # use solar_events::Depression;
    /// let golden_hour = Depression::rising(4.0).unwrap();
    /// assert_eq!(golden_hour.degrees(), 4.0);
    /// assert!(!golden_hour.is_setting());
    /// assert!(Depression::rising(-1.0).is_err());
    /// ```
    pub fn rising(magnitude: f64) -> Result<Self> {
        Ok(Self(check_depression_magnitude(magnitude)?))
    }

    /// Creates a custom evening-side depression.
    ///
    /// # Errors
    /// Returns `InvalidDepression` if the magnitude is outside 0 to 90 degrees.
    pub fn setting(magnitude: f64) -> Result<Self> {
        Ok(Self(-check_depression_magnitude(magnitude)?))
    }

    /// Gets the signed depression in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.0
    }

    /// Gets the unsigned depression below the horizon in degrees.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.0.abs()
    }

    /// Checks if this depression selects the evening-side solution.
    ///
    /// `Depression::setting(0.0)` is stored as -0.0 and still counts as setting.
    #[must_use]
    pub const fn is_setting(&self) -> bool {
        self.0.is_sign_negative()
    }
}

/// The depression-based solar events, in their usual order through the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolarEvent {
    /// Sun reaches 18° below the horizon in the morning.
    AstronomicalTwilightBegin,
    /// Sun reaches 12° below the horizon in the morning.
    NauticalTwilightBegin,
    /// Sun reaches 6° below the horizon in the morning.
    CivilTwilightBegin,
    /// Upper limb of the sun appears on the horizon.
    Sunrise,
    /// Upper limb of the sun disappears below the horizon.
    Sunset,
    /// Sun sinks to 6° below the horizon in the evening.
    CivilTwilightEnd,
    /// Sun sinks to 12° below the horizon in the evening.
    NauticalTwilightEnd,
    /// Sun sinks to 18° below the horizon in the evening.
    AstronomicalTwilightEnd,
}

impl SolarEvent {
    /// All events, morning first.
    pub const ALL: [Self; 8] = [
        Self::AstronomicalTwilightBegin,
        Self::NauticalTwilightBegin,
        Self::CivilTwilightBegin,
        Self::Sunrise,
        Self::Sunset,
        Self::CivilTwilightEnd,
        Self::NauticalTwilightEnd,
        Self::AstronomicalTwilightEnd,
    ];

    /// Gets the depression angle that defines this event.
    #[must_use]
    pub const fn depression(self) -> Depression {
        match self {
            Self::AstronomicalTwilightBegin => Depression::ASTRONOMICAL_TWILIGHT_BEGIN,
            Self::NauticalTwilightBegin => Depression::NAUTICAL_TWILIGHT_BEGIN,
            Self::CivilTwilightBegin => Depression::CIVIL_TWILIGHT_BEGIN,
            Self::Sunrise => Depression::SUNRISE,
            Self::Sunset => Depression::SUNSET,
            Self::CivilTwilightEnd => Depression::CIVIL_TWILIGHT_END,
            Self::NauticalTwilightEnd => Depression::NAUTICAL_TWILIGHT_END,
            Self::AstronomicalTwilightEnd => Depression::ASTRONOMICAL_TWILIGHT_END,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Minutes since 0:00 UTC of a base date, without the chrono calendar applied.
///
/// Values outside 0..1440 belong to the previous or next day(s).
///
/// # Example
/// ```
/// # use solar_events::MinutesUtc;
/// let late = MinutesUtc::from_minutes(1470.0); // 00:30 next day
/// let clock = late.clock_time();
/// assert_eq!(clock.day_offset(), 1);
/// assert_eq!((clock.hour(), clock.minute(), clock.second()), (0, 30, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MinutesUtc(f64);

impl MinutesUtc {
    /// Creates a new `MinutesUtc` from minutes since midnight UTC.
    #[must_use]
    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes)
    }

    /// Gets the raw minutes value.
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.0
    }

    /// Splits the minutes into a day offset and a wall-clock time, truncated to whole seconds.
    ///
    /// Hours, minutes and seconds are first truncated toward zero, then carried upwards
    /// (seconds into minutes, minutes into hours, hours into days) with floor division, so a
    /// negative value such as -30.0 becomes 23:30:00 on the previous day.
    #[must_use]
    pub fn clock_time(&self) -> ClockTime {
        let hours = self.0 / 60.0;
        let whole_hours = trunc(hours);
        let minutes = (hours - whole_hours) * 60.0;
        let whole_minutes = trunc(minutes);
        let seconds = trunc((minutes - whole_minutes) * 60.0);

        let (minute, second) = carry(whole_minutes as i64, seconds as i64, 60);
        let (hour, minute) = carry(whole_hours as i64, minute, 60);
        let (day_offset, hour) = carry(0, hour, 24);

        ClockTime {
            day_offset,
            hour: hour as u32,
            minute: minute as u32,
            second: second as u32,
        }
    }
}

/// Moves whole multiples of `base` from `lower` into `higher`, leaving `lower` in `0..base`.
const fn carry(higher: i64, lower: i64, base: i64) -> (i64, i64) {
    (
        higher.saturating_add(lower.div_euclid(base)),
        lower.rem_euclid(base),
    )
}

/// Wall-clock time of day plus the number of days it lies away from the base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    day_offset: i64,
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    /// Whole days from the base date (negative = earlier).
    #[must_use]
    pub const fn day_offset(&self) -> i64 {
        self.day_offset
    }

    /// Hour of day, 0-23.
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute, 0-59.
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Second, 0-59.
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }
}

/// Which side of the depression threshold the sun stays on when an event does not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extreme {
    /// The sun stays above the threshold all day (polar day for that depression).
    AlwaysAbove,
    /// The sun stays below the threshold all day (polar night for that depression).
    AlwaysBelow,
}

/// Outcome of a single solar event calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult<T = ()> {
    /// The sun crosses the requested depression at this time.
    Occurs(T),
    /// The sun never reaches the requested depression on this date.
    NeverReachesDepression(Extreme),
}

impl<T> EventResult<T> {
    /// Checks if the event happens.
    pub const fn occurs(&self) -> bool {
        matches!(self, Self::Occurs(_))
    }

    /// Checks if the sun stays above the depression (polar day).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::NeverReachesDepression(Extreme::AlwaysAbove))
    }

    /// Checks if the sun stays below the depression (polar night).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::NeverReachesDepression(Extreme::AlwaysBelow))
    }

    /// Gets the event time, if the event happens.
    pub const fn value(&self) -> Option<&T> {
        if let Self::Occurs(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Gets the extreme, if the event does not happen.
    pub const fn extreme(&self) -> Option<Extreme> {
        if let Self::NeverReachesDepression(extreme) = self {
            Some(*extreme)
        } else {
            None
        }
    }

    /// Consumes the result, returning the event time if it happens.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Occurs(value) => Some(value),
            Self::NeverReachesDepression(_) => None,
        }
    }

    /// Maps the event time, keeping a missing event as is.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> EventResult<U> {
        match self {
            Self::Occurs(value) => EventResult::Occurs(f(value)),
            Self::NeverReachesDepression(extreme) => EventResult::NeverReachesDepression(extreme),
        }
    }

    /// Maps the event time with a fallible function.
    ///
    /// # Errors
    /// Returns the error produced by `f`.
    pub fn try_map<U, E, F: FnOnce(T) -> core::result::Result<U, E>>(
        self,
        f: F,
    ) -> core::result::Result<EventResult<U>, E> {
        match self {
            Self::Occurs(value) => f(value).map(EventResult::Occurs),
            Self::NeverReachesDepression(extreme) => {
                Ok(EventResult::NeverReachesDepression(extreme))
            }
        }
    }
}

/// All solar events of one date at one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarDay {
    solar_noon: DateTime<Utc>,
    events: [EventResult<DateTime<Utc>>; 8],
}

impl SolarDay {
    /// Creates a solar day from the noon time and the event results in [`SolarEvent::ALL`] order.
    #[must_use]
    pub const fn new(solar_noon: DateTime<Utc>, events: [EventResult<DateTime<Utc>>; 8]) -> Self {
        Self { solar_noon, events }
    }

    /// Gets solar noon (the sun's transit of the local meridian).
    #[must_use]
    pub const fn solar_noon(&self) -> &DateTime<Utc> {
        &self.solar_noon
    }

    /// Gets the result for a single event.
    #[must_use]
    pub const fn event(&self, event: SolarEvent) -> &EventResult<DateTime<Utc>> {
        &self.events[event.index()]
    }

    /// Gets the sunrise result.
    #[must_use]
    pub const fn sunrise(&self) -> &EventResult<DateTime<Utc>> {
        self.event(SolarEvent::Sunrise)
    }

    /// Gets the sunset result.
    #[must_use]
    pub const fn sunset(&self) -> &EventResult<DateTime<Utc>> {
        self.event(SolarEvent::Sunset)
    }

    /// Iterates over all events, morning first.
    pub fn iter(&self) -> impl Iterator<Item = (SolarEvent, &EventResult<DateTime<Utc>>)> {
        SolarEvent::ALL.into_iter().zip(self.events.iter())
    }
}
