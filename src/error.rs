//! Error types for the solar events library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar event calculations.
///
/// A sun that never reaches the requested depression is not an error; it is reported
/// through [`EventResult::NeverReachesDepression`](crate::EventResult).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid calendar input, or an instant outside the calendar's supported range.
    InvalidDate {
        /// Description of the calendar constraint violation.
        message: &'static str,
    },
    /// Timezone identifier that the timezone database does not know.
    UnknownTimezone,
    /// Latitude or longitude that is NaN or infinite.
    NonFiniteCoordinate {
        /// The offending coordinate value.
        value: f64,
    },
    /// Finite coordinate too large for the ephemeris, which then overflows.
    CoordinateOutOfRange {
        /// The offending coordinate value.
        value: f64,
    },
    /// Timezone offset that is not finite or exceeds one day.
    InvalidTimezoneOffset {
        /// The offset in fractional days.
        value: f64,
    },
    /// Depression magnitude outside 0 to 90 degrees.
    InvalidDepression {
        /// The invalid depression value provided.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::UnknownTimezone => write!(f, "unknown timezone identifier"),
            Self::NonFiniteCoordinate { value } => {
                write!(f, "coordinate {value} is not a finite number")
            }
            Self::CoordinateOutOfRange { value } => {
                write!(f, "coordinate {value} is too large for the solar calculation")
            }
            Self::InvalidTimezoneOffset { value } => {
                write!(f, "timezone offset {value} days is outside ±1 day")
            }
            Self::InvalidDepression { value } => {
                write!(
                    f,
                    "invalid depression {value}° (magnitude must be between 0° and 90°)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an unknown timezone error.
    #[must_use]
    pub const fn unknown_timezone() -> Self {
        Self::UnknownTimezone
    }

    /// Creates a non-finite coordinate error.
    #[must_use]
    pub const fn non_finite_coordinate(value: f64) -> Self {
        Self::NonFiniteCoordinate { value }
    }

    /// Creates a coordinate out of range error.
    #[must_use]
    pub const fn coordinate_out_of_range(value: f64) -> Self {
        Self::CoordinateOutOfRange { value }
    }

    /// Creates an invalid timezone offset error.
    #[must_use]
    pub const fn invalid_timezone_offset(value: f64) -> Self {
        Self::InvalidTimezoneOffset { value }
    }

    /// Creates an invalid depression error.
    #[must_use]
    pub const fn invalid_depression(value: f64) -> Self {
        Self::InvalidDepression { value }
    }
}

/// Validates that a coordinate is a finite number.
///
/// # Errors
/// Returns `NonFiniteCoordinate` for NaN or infinite values.
pub fn check_finite_coordinate(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::non_finite_coordinate(value));
    }
    Ok(value)
}

/// Validates a timezone offset in fractional days is finite and within ±1 day.
///
/// # Errors
/// Returns `InvalidTimezoneOffset` for NaN, infinite or larger offsets.
pub fn check_timezone_offset(days: f64) -> Result<f64> {
    if !(-1.0..=1.0).contains(&days) {
        return Err(Error::invalid_timezone_offset(days));
    }
    Ok(days)
}

/// Validates a depression magnitude is within [0, 90) degrees.
///
/// # Errors
/// Returns `InvalidDepression` for negative, non-finite, or too large magnitudes.
pub fn check_depression_magnitude(magnitude: f64) -> Result<f64> {
    if !(0.0..90.0).contains(&magnitude) {
        return Err(Error::invalid_depression(magnitude));
    }
    Ok(magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validation() {
        assert!(check_finite_coordinate(0.0).is_ok());
        assert!(check_finite_coordinate(95.0).is_ok());
        assert!(check_finite_coordinate(-1_000.0).is_ok());

        assert!(check_finite_coordinate(f64::NAN).is_err());
        assert!(check_finite_coordinate(f64::INFINITY).is_err());
        assert!(check_finite_coordinate(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_timezone_offset_validation() {
        assert_eq!(check_timezone_offset(0.0), Ok(0.0));
        assert_eq!(check_timezone_offset(-5.0 / 24.0), Ok(-5.0 / 24.0));
        assert_eq!(check_timezone_offset(14.0 / 24.0), Ok(14.0 / 24.0));

        assert!(check_timezone_offset(f64::NAN).is_err());
        assert!(check_timezone_offset(f64::INFINITY).is_err());
        assert_eq!(
            check_timezone_offset(1e300),
            Err(Error::InvalidTimezoneOffset { value: 1e300 })
        );
    }

    #[test]
    fn test_depression_validation() {
        assert_eq!(check_depression_magnitude(0.0), Ok(0.0));
        assert_eq!(check_depression_magnitude(18.0), Ok(18.0));
        assert!(check_depression_magnitude(89.9).is_ok());

        assert!(check_depression_magnitude(-0.5).is_err());
        assert!(check_depression_magnitude(90.0).is_err());
        assert!(check_depression_magnitude(f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_date("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date: month must be between 1 and 12"
        );

        assert_eq!(
            Error::unknown_timezone().to_string(),
            "unknown timezone identifier"
        );

        let err = Error::invalid_depression(95.0);
        assert_eq!(
            err.to_string(),
            "invalid depression 95° (magnitude must be between 0° and 90°)"
        );

        assert_eq!(
            Error::coordinate_out_of_range(1e300).to_string(),
            "coordinate 1e300 is too large for the solar calculation"
        );
        assert_eq!(
            Error::invalid_timezone_offset(1.5).to_string(),
            "timezone offset 1.5 days is outside ±1 day"
        );
    }
}
