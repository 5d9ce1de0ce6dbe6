//! Hour angle at which the sun reaches a given depression.

use crate::error::check_finite_coordinate;
use crate::math::{acos, cos, degrees_to_radians, tan};
use crate::types::{Depression, EventResult, Extreme};
use crate::{Error, Result};

/// Solves the hour angle (radians) at which the sun sits `depression` below the horizon.
///
/// Uses cos H = cos(90° + d) / (cos φ · cos δ) − tan φ · tan δ with the unsigned depression d.
/// The sign of `depression` picks the solution: morning events get a positive hour angle
/// (before transit), evening events a negative one.
///
/// If the right-hand side falls outside [-1, 1] the sun never reaches the depression on that
/// day and no `acos` is taken: above 1 the sun stays below the threshold, below -1 it stays
/// above.
///
/// `latitude` and `declination` are in degrees; callers clamp latitude away from the poles.
///
/// # Errors
/// Returns `NonFiniteCoordinate` if `latitude` or `declination` is NaN or infinite.
///
/// # Example
/// ```
/// use solar_events::{noaa::hour_angle::hour_angle, Depression, Extreme, EventResult};
///
/// // Equator at an equinox: the sun rises 90.833° of hour angle before noon
/// let h = hour_angle(0.0, 0.0, Depression::SUNRISE).unwrap().into_value().unwrap();
/// assert!((h.to_degrees() - 90.833).abs() < 1e-9);
///
/// // 78°N in June: the sun never sets
/// assert_eq!(
///     hour_angle(78.0, 23.44, Depression::SUNSET),
///     Ok(EventResult::NeverReachesDepression(Extreme::AlwaysAbove))
/// );
/// ```
pub fn hour_angle(
    latitude: f64,
    declination: f64,
    depression: Depression,
) -> Result<EventResult<f64>> {
    let phi = degrees_to_radians(check_finite_coordinate(latitude)?);
    let delta = degrees_to_radians(check_finite_coordinate(declination)?);
    let zenith = degrees_to_radians(90.0 + depression.magnitude());

    let acos_arg = cos(zenith) / (cos(phi) * cos(delta)) - tan(phi) * tan(delta);

    // NaN fails both comparisons below
    if !(-1.0..=1.0).contains(&acos_arg) {
        return if acos_arg > 1.0 {
            Ok(EventResult::NeverReachesDepression(Extreme::AlwaysBelow))
        } else if acos_arg < -1.0 {
            Ok(EventResult::NeverReachesDepression(Extreme::AlwaysAbove))
        } else {
            Err(Error::non_finite_coordinate(acos_arg))
        };
    }

    let h = acos(acos_arg);
    Ok(EventResult::Occurs(if depression.is_setting() { -h } else { h }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(latitude: f64, declination: f64, depression: Depression) -> EventResult<f64> {
        hour_angle(latitude, declination, depression).unwrap()
    }

    #[test]
    fn test_sign_selects_solution() {
        let rise = solve(45.0, 10.0, Depression::SUNRISE).into_value().unwrap();
        let set = solve(45.0, 10.0, Depression::SUNSET).into_value().unwrap();
        assert!(rise > 0.0);
        assert_eq!(set, -rise);
    }

    #[test]
    fn test_deeper_depression_means_larger_hour_angle() {
        let civil = solve(45.0, 0.0, Depression::CIVIL_TWILIGHT_BEGIN)
            .into_value()
            .unwrap();
        let nautical = solve(45.0, 0.0, Depression::NAUTICAL_TWILIGHT_BEGIN)
            .into_value()
            .unwrap();
        let astronomical = solve(45.0, 0.0, Depression::ASTRONOMICAL_TWILIGHT_BEGIN)
            .into_value()
            .unwrap();
        assert!(civil < nautical && nautical < astronomical);
    }

    #[test]
    fn test_polar_day_and_night() {
        assert_eq!(
            solve(78.0, 23.44, Depression::SUNRISE),
            EventResult::NeverReachesDepression(Extreme::AlwaysAbove)
        );
        assert_eq!(
            solve(78.0, -23.44, Depression::SUNRISE),
            EventResult::NeverReachesDepression(Extreme::AlwaysBelow)
        );
        // southern hemisphere mirrors the north
        assert_eq!(
            solve(-78.0, -23.44, Depression::SUNSET),
            EventResult::NeverReachesDepression(Extreme::AlwaysAbove)
        );
    }

    #[test]
    fn test_twilight_persists_in_polar_night() {
        // Sun never rises at 78°N in December but does dip past 18°
        assert!(solve(78.0, -23.44, Depression::ASTRONOMICAL_TWILIGHT_BEGIN).occurs());
    }

    #[test]
    fn test_clamped_latitude_stays_finite() {
        let result = solve(89.8, 0.0, Depression::SUNRISE);
        if let EventResult::Occurs(h) = result {
            assert!(h.is_finite());
        }
    }

    #[test]
    fn test_non_finite_inputs_never_reach_acos() {
        // NaN compares false against both bounds and must not slip into acos
        for (latitude, declination) in [
            (f64::NAN, 10.0),
            (45.0, f64::NAN),
            (f64::INFINITY, 10.0),
            (45.0, f64::NEG_INFINITY),
        ] {
            let result = hour_angle(latitude, declination, Depression::SUNRISE);
            assert!(
                matches!(result, Err(Error::NonFiniteCoordinate { .. })),
                "({latitude}, {declination}) gave {result:?}"
            );
        }
    }
}
