//! NOAA sunrise, sunset, solar noon and twilight calculation.
//!
//! Implements the algorithm of the NOAA solar calculator (after Meeus, "Astronomical
//! Algorithms"). Event times are refined in exactly two passes: a sunrise-based estimate of
//! the UTC time seeds a second evaluation of the ephemeris at that time, which then yields the
//! time of the requested event. Accuracy is about one minute at mid latitudes.
//!
//! Every function is pure. Instants are returned in UTC; the optional timezone identifier only
//! shifts the Julian day used for the ephemeris.

#![allow(clippy::unreadable_literal)]

pub mod hour_angle;

use crate::ephemeris::{declination, equation_of_time};
use crate::error::{check_finite_coordinate, check_timezone_offset};
use crate::math::radians_to_degrees;
use crate::time::{assemble, JulianCentury, JulianDay};
use crate::timezone::utc_offset_days;
use crate::types::{
    CalendarDate, Depression, EventResult, GeoCoordinate, MinutesUtc, SolarDay, SolarEvent,
};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use hour_angle::hour_angle;

/// Minutes per day (1,440)
const MINUTES_PER_DAY: f64 = 1440.0;

/// 12:00 expressed in minutes of the day
const NOON_MINUTES: f64 = 720.0;

/// Minutes of time per degree of longitude (or hour angle)
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Calculate solar noon: the time the sun crosses the local meridian.
///
/// # Arguments
/// * `date` - Calendar date
/// * `longitude` - Observer longitude in degrees, positive east
/// * `timezone` - Optional IANA timezone identifier; `None` or empty means UTC
///
/// # Errors
/// Returns `NonFiniteCoordinate` for a NaN/infinite longitude, `CoordinateOutOfRange` for one
/// too large to calculate with, `UnknownTimezone` for an unrecognized identifier, or
/// `InvalidDate` if the result leaves chrono's date range.
///
/// # Example
/// ```
/// use solar_events::{noaa, CalendarDate};
///
/// let date = CalendarDate::new(2024, 3, 20).unwrap();
/// let noon = noaa::solar_noon(date, 0.0, None).unwrap();
/// assert_eq!(noon.format("%H:%M").to_string(), "12:07");
/// ```
pub fn solar_noon(
    date: CalendarDate,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<DateTime<Utc>> {
    let longitude = check_finite_coordinate(longitude)?;
    let offset = utc_offset_days(timezone, date)?;
    assemble(noon_minutes_utc(date, longitude, offset)?, date)
}

/// Calculate the time the sun reaches an arbitrary depression angle.
///
/// Positive depressions resolve the morning crossing, negative ones the evening crossing.
///
/// # Arguments
/// * `date` - Calendar date
/// * `latitude` - Observer latitude in degrees; saturated to ±89.8°
/// * `longitude` - Observer longitude in degrees, positive east
/// * `depression` - Depression angle defining the event
/// * `timezone` - Optional IANA timezone identifier; `None` or empty means UTC
///
/// # Returns
/// The UTC instant, or `NeverReachesDepression` when the sun stays above or below the
/// depression all day.
///
/// # Errors
/// Returns `NonFiniteCoordinate` for NaN/infinite coordinates, `CoordinateOutOfRange` for a
/// longitude too large to calculate with, `UnknownTimezone` for an unrecognized identifier,
/// or `InvalidDate` if the result leaves chrono's date range.
///
/// # Example
/// ```
/// use solar_events::{noaa, CalendarDate, Depression};
///
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
/// let golden_hour_end = Depression::rising(4.0).unwrap();
/// let result = noaa::solar_event(date, 48.21, 16.37, golden_hour_end, Some("Europe/Vienna"))
///     .unwrap();
/// assert!(result.occurs());
/// ```
pub fn solar_event(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    depression: Depression,
    timezone: Option<&str>,
) -> Result<EventResult<DateTime<Utc>>> {
    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    let offset = utc_offset_days(timezone, date)?;
    event_minutes_utc(date, coordinate, depression, offset)?.try_map(|m| assemble(m, date))
}

/// Calculate sunrise (sun's upper limb on the horizon, 0.833° depression).
///
/// # Errors
/// See [`solar_event`].
///
/// # Example
/// ```
/// use solar_events::{noaa, CalendarDate, EventResult};
///
/// let date = CalendarDate::new(2024, 3, 20).unwrap();
/// match noaa::sunrise(date, 51.5, 0.0, None).unwrap() {
///     EventResult::Occurs(sunrise) => println!("Sunrise: {}", sunrise.format("%H:%M:%S UTC")),
///     EventResult::NeverReachesDepression(extreme) => println!("No sunrise: {extreme:?}"),
/// }
/// ```
pub fn sunrise(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<EventResult<DateTime<Utc>>> {
    solar_event(date, latitude, longitude, Depression::SUNRISE, timezone)
}

/// Calculate sunset (sun's upper limb on the horizon, 0.833° depression).
///
/// # Errors
/// See [`solar_event`].
pub fn sunset(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<EventResult<DateTime<Utc>>> {
    solar_event(date, latitude, longitude, Depression::SUNSET, timezone)
}

/// Calculate the beginning of morning civil twilight (6° depression).
///
/// # Errors
/// See [`solar_event`].
pub fn civil_twilight_begin(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<EventResult<DateTime<Utc>>> {
    solar_event(
        date,
        latitude,
        longitude,
        Depression::CIVIL_TWILIGHT_BEGIN,
        timezone,
    )
}

/// Calculate the end of evening civil twilight (6° depression).
///
/// # Errors
/// See [`solar_event`].
pub fn civil_twilight_end(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<EventResult<DateTime<Utc>>> {
    solar_event(
        date,
        latitude,
        longitude,
        Depression::CIVIL_TWILIGHT_END,
        timezone,
    )
}

/// Calculate the beginning of morning nautical twilight (12° depression).
///
/// # Errors
/// See [`solar_event`].
pub fn nautical_twilight_begin(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<EventResult<DateTime<Utc>>> {
    solar_event(
        date,
        latitude,
        longitude,
        Depression::NAUTICAL_TWILIGHT_BEGIN,
        timezone,
    )
}

/// Calculate the end of evening nautical twilight (12° depression).
///
/// # Errors
/// See [`solar_event`].
pub fn nautical_twilight_end(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<EventResult<DateTime<Utc>>> {
    solar_event(
        date,
        latitude,
        longitude,
        Depression::NAUTICAL_TWILIGHT_END,
        timezone,
    )
}

/// Calculate the beginning of morning astronomical twilight (18° depression).
///
/// # Errors
/// See [`solar_event`].
pub fn astronomical_twilight_begin(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<EventResult<DateTime<Utc>>> {
    solar_event(
        date,
        latitude,
        longitude,
        Depression::ASTRONOMICAL_TWILIGHT_BEGIN,
        timezone,
    )
}

/// Calculate the end of evening astronomical twilight (18° depression).
///
/// # Errors
/// See [`solar_event`].
pub fn astronomical_twilight_end(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<EventResult<DateTime<Utc>>> {
    solar_event(
        date,
        latitude,
        longitude,
        Depression::ASTRONOMICAL_TWILIGHT_END,
        timezone,
    )
}

/// Calculate solar noon and all eight depression events for one date and location.
///
/// The coordinate and timezone are resolved once and shared by every event.
///
/// # Errors
/// See [`solar_event`].
///
/// # Example
/// ```
/// use solar_events::{noaa, CalendarDate, SolarEvent};
///
/// let date = CalendarDate::new(2024, 7, 1).unwrap();
/// let day = noaa::solar_day(date, 52.37, 4.89, Some("Europe/Amsterdam")).unwrap();
///
/// assert!(day.sunrise().occurs());
/// // no astronomical night in Amsterdam around midsummer
/// assert!(day.event(SolarEvent::AstronomicalTwilightEnd).is_polar_day());
/// ```
pub fn solar_day(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    timezone: Option<&str>,
) -> Result<SolarDay> {
    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    let offset = utc_offset_days(timezone, date)?;

    let noon = assemble(noon_minutes_utc(date, coordinate.longitude(), offset)?, date)?;
    let [a, b, c, d, e, f, g, h] = SolarEvent::ALL.map(|event| {
        event_minutes_utc(date, coordinate, event.depression(), offset)?
            .try_map(|m| assemble(m, date))
    });

    Ok(SolarDay::new(noon, [a?, b?, c?, d?, e?, f?, g?, h?]))
}

/// Calculate an event time as minutes since 0:00 UTC of `date`, without chrono instants.
///
/// Uses the two-pass refinement: the first pass estimates the UTC time of sunrise, the
/// Julian century is advanced to that estimate, and the second pass resolves `depression`.
/// When there is no sunrise to seed from (polar day or night at 0.833°), the seed falls back
/// to the transit time so deeper twilights that still occur are resolved.
///
/// # Arguments
/// * `date` - Calendar date
/// * `coordinate` - Observer location
/// * `depression` - Depression angle defining the event
/// * `timezone_offset_days` - UTC offset in fractional days (see
///   [`utc_offset_days`](crate::timezone::utc_offset_days))
///
/// # Errors
/// Returns `InvalidTimezoneOffset` for a NaN, infinite or over one day offset, and
/// `CoordinateOutOfRange` when the longitude is too large for the ephemeris to stay finite.
///
/// # Example
/// ```
/// use solar_events::{noaa, CalendarDate, Depression, GeoCoordinate};
///
/// let date = CalendarDate::new(2024, 3, 20).unwrap();
/// let london = GeoCoordinate::new(51.5, 0.0).unwrap();
/// let minutes = noaa::event_minutes_utc(date, london, Depression::SUNRISE, 0.0)
///     .unwrap()
///     .into_value()
///     .unwrap();
/// assert!((minutes.minutes() - 361.75).abs() < 1.0);
/// ```
pub fn event_minutes_utc(
    date: CalendarDate,
    coordinate: GeoCoordinate,
    depression: Depression,
    timezone_offset_days: f64,
) -> Result<EventResult<MinutesUtc>> {
    let offset = check_timezone_offset(timezone_offset_days)?;
    let jc = JulianDay::from_calendar(date, offset).to_century();

    let seed = match utc_minutes(jc, coordinate, Depression::SUNRISE)? {
        EventResult::Occurs(minutes) => minutes,
        EventResult::NeverReachesDepression(_) => transit_minutes(jc, coordinate.longitude())?,
    };

    let refined = jc
        .to_julian_day()
        .add_days(seed / MINUTES_PER_DAY)
        .to_century();

    Ok(utc_minutes(refined, coordinate, depression)?.map(MinutesUtc::from_minutes))
}

/// Calculate solar noon as minutes since 0:00 UTC of `date`, without chrono instants.
///
/// A single pass: the equation of time is taken at local solar midday.
///
/// # Errors
/// Returns `NonFiniteCoordinate` for a NaN/infinite longitude, `CoordinateOutOfRange` when
/// it is too large for the ephemeris, or `InvalidTimezoneOffset` for a bad offset.
pub fn noon_minutes_utc(
    date: CalendarDate,
    longitude: f64,
    timezone_offset_days: f64,
) -> Result<MinutesUtc> {
    let longitude = check_finite_coordinate(longitude)?;
    let offset = check_timezone_offset(timezone_offset_days)?;
    let jc = JulianDay::from_calendar(date, offset)
        .add_days(0.5 - longitude / 360.0)
        .to_century();
    transit_minutes(jc, longitude).map(MinutesUtc::from_minutes)
}

/// UTC minutes at which the sun reaches `depression`, evaluated at a single century.
fn utc_minutes(
    jc: JulianCentury,
    coordinate: GeoCoordinate,
    depression: Depression,
) -> Result<EventResult<f64>> {
    let longitude = coordinate.longitude();
    let eot = finite_for(equation_of_time(jc), longitude)?;
    let delta = finite_for(declination(jc), longitude)?;

    hour_angle(coordinate.latitude(), delta, depression)?.try_map(|h| {
        let degrees_from_noon = -longitude - radians_to_degrees(h);
        finite_for(
            NOON_MINUTES + MINUTES_PER_DEGREE * degrees_from_noon - eot,
            longitude,
        )
    })
}

/// UTC minutes of the meridian transit, evaluated at a single century.
fn transit_minutes(jc: JulianCentury, longitude: f64) -> Result<f64> {
    finite_for(
        NOON_MINUTES - MINUTES_PER_DEGREE * longitude - equation_of_time(jc),
        longitude,
    )
}

/// Huge finite longitudes overflow the ephemeris polynomials; report the longitude.
fn finite_for(value: f64, longitude: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::coordinate_out_of_range(longitude))
    }
}
