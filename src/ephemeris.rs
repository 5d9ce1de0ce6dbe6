//! Low-precision solar ephemeris.
//!
//! Closed-form expressions from Meeus, "Astronomical Algorithms" (chapters 22, 25 and 28),
//! as used by the NOAA solar calculator. Accuracy is about 0.01° for declination, ample for
//! event times to the minute, and every function is total over the real numbers.
//!
//! All functions take the time in Julian centuries since J2000.0 and return degrees unless
//! noted otherwise.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin, clamp_unit, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin, tan,
};
use crate::time::JulianCentury;

/// Longitude of the ascending node of the Moon's orbit, used for nutation and aberration.
fn lunar_node_longitude(jc: JulianCentury) -> f64 {
    125.04 - 1934.136 * jc.value()
}

/// Mean obliquity of the ecliptic.
///
/// The polynomial yields arcseconds on top of 23° 26′.
#[must_use]
pub fn mean_obliquity_of_ecliptic(jc: JulianCentury) -> f64 {
    let seconds = polynomial(&[21.448, -46.8150, -0.00059, 0.001813], jc.value());
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation.
#[must_use]
pub fn corrected_obliquity(jc: JulianCentury) -> f64 {
    let omega = degrees_to_radians(lunar_node_longitude(jc));
    mean_obliquity_of_ecliptic(jc) + 0.00256 * cos(omega)
}

/// Geometric mean anomaly of the sun. Not wrapped; may exceed 360°.
#[must_use]
pub fn mean_anomaly(jc: JulianCentury) -> f64 {
    polynomial(&[357.52911, 35999.05029, -0.0001537], jc.value())
}

/// Geometric mean longitude of the sun, in [0, 360).
#[must_use]
pub fn mean_longitude(jc: JulianCentury) -> f64 {
    normalize_degrees_0_to_360(polynomial(&[280.46646, 36000.76983, 0.0003032], jc.value()))
}

/// Eccentricity of Earth's orbit (dimensionless).
#[must_use]
pub fn eccentricity_of_orbit(jc: JulianCentury) -> f64 {
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], jc.value())
}

/// Equation of the center: true anomaly minus mean anomaly.
#[must_use]
pub fn equation_of_center(jc: JulianCentury) -> f64 {
    let t = jc.value();
    let m = degrees_to_radians(mean_anomaly(jc));

    sin(m) * polynomial(&[1.914602, -0.004817, -0.000014], t)
        + sin(2.0 * m) * polynomial(&[0.019993, -0.000101], t)
        + sin(3.0 * m) * 0.000289
}

/// True (geometric) ecliptic longitude of the sun.
#[must_use]
pub fn true_longitude(jc: JulianCentury) -> f64 {
    mean_longitude(jc) + equation_of_center(jc)
}

/// Apparent ecliptic longitude of the sun, corrected for nutation and aberration.
#[must_use]
pub fn apparent_longitude(jc: JulianCentury) -> f64 {
    let omega = degrees_to_radians(lunar_node_longitude(jc));
    true_longitude(jc) - 0.00569 - 0.00478 * sin(omega)
}

/// Declination of the sun.
#[must_use]
pub fn declination(jc: JulianCentury) -> f64 {
    let epsilon = degrees_to_radians(corrected_obliquity(jc));
    let lambda = degrees_to_radians(apparent_longitude(jc));
    radians_to_degrees(asin(clamp_unit(sin(epsilon) * sin(lambda))))
}

/// Equation of time in minutes: apparent solar time minus mean solar time.
///
/// Positive values mean a sundial runs ahead of the clock.
#[must_use]
pub fn equation_of_time(jc: JulianCentury) -> f64 {
    let l0 = degrees_to_radians(mean_longitude(jc));
    let e = eccentricity_of_orbit(jc);
    let m = degrees_to_radians(mean_anomaly(jc));
    let y = {
        let half_tan = tan(degrees_to_radians(corrected_obliquity(jc)) / 2.0);
        half_tan * half_tan
    };

    let sin_m = sin(m);
    let e_time = y * sin(2.0 * l0) - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos(2.0 * l0)
        - 0.5 * y * y * sin(4.0 * l0)
        - 1.25 * e * e * sin(2.0 * m);

    radians_to_degrees(e_time) * 4.0
}
