//! # Solar Events Library
//!
//! Sunrise, sunset, solar noon and twilight times using the NOAA solar calculator algorithm.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The calculation follows the low-precision solar ephemeris of Meeus, "Astronomical
//! Algorithms", as published by the NOAA Global Monitoring Laboratory. Results are accurate to
//! about one minute for latitudes between ±72° and degrade towards the poles.
//!
//! ## Features
//!
//! - Sunrise, sunset and solar noon
//! - Civil (6°), nautical (12°) and astronomical (18°) twilight
//! - Custom depression angles (e.g. golden hour)
//! - Polar day and night reported explicitly instead of as missing values
//! - Thread-safe: stateless functions over immutable value types
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `tz` (default): Resolve IANA timezone identifiers via `chrono-tz`
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + timezone database
//! solar-events = "0.1"
//!
//! # UTC only, smallest dependency tree
//! solar-events = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # no_std
//! solar-events = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.
//! - NOAA Global Monitoring Laboratory. Solar Calculation Details.
//!   <https://gml.noaa.gov/grad/solcalc/calcdetails.html>
//!
//! ## Quick Start
//!
//! ### Sunrise and Sunset
//! ```rust
//! use solar_events::{noaa, CalendarDate, EventResult};
//!
//! let date = CalendarDate::new(2024, 3, 20).unwrap();
//! let result = noaa::sunrise(date, 51.5, 0.0, None).unwrap();
//!
//! match result {
//!     EventResult::Occurs(sunrise) => println!("Sunrise: {sunrise}"),
//!     EventResult::NeverReachesDepression(extreme) => println!("No sunrise ({extreme:?})"),
//! }
//! ```
//!
//! ### All events for one day
//! ```rust
//! # #[cfg(feature = "tz")] {
//! use solar_events::{noaa, CalendarDate};
//!
//! let date = CalendarDate::new(2023, 6, 21).unwrap();
//! let day = noaa::solar_day(date, 37.7749, -122.4194, Some("America/Los_Angeles")).unwrap();
//!
//! println!("Solar noon: {}", day.solar_noon());
//! for (event, result) in day.iter() {
//!     println!("{event:?}: {:?}", result.value());
//! }
//! # }
//! ```
//!
//! ### Numeric API (no instants)
//! ```rust
//! use solar_events::{noaa, CalendarDate, Depression, GeoCoordinate};
//!
//! let date = CalendarDate::new(2024, 3, 20).unwrap();
//! let london = GeoCoordinate::new(51.5, 0.0).unwrap();
//!
//! let sunset = noaa::event_minutes_utc(date, london, Depression::SUNSET, 0.0).unwrap();
//! if let Some(minutes) = sunset.value() {
//!     let clock = minutes.clock_time();
//!     println!("Sunset {:02}:{:02}:{:02} UTC", clock.hour(), clock.minute(), clock.second());
//! }
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, positive north, saturated to ±89.8°
//! - **Longitude**: degrees, positive east
//! - **Depression**: degrees below the geometric horizon; positive for morning events,
//!   negative for evening events
//! - **Instants**: always UTC; a timezone only selects which local calendar day is meant

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{
    CalendarDate, ClockTime, Depression, EventResult, Extreme, GeoCoordinate, MinutesUtc,
    SolarDay, SolarEvent, MAX_LATITUDE,
};

// Algorithm modules
pub mod ephemeris;
pub mod noaa;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
pub mod timezone;
