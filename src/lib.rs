//! # natal
//!
//! Approximate geocentric ecliptic longitudes of the Sun, the Moon and the five
//! naked-eye planets, plus the ascendant and midheaven of an observer.
//!
//! The two entry points are pure functions of their arguments:
//!
//! * [`planets`] – longitudes of every body at a Unix millisecond timestamp,
//! * [`angles`] – ascendant and midheaven for a timestamp, latitude and longitude.
//!
//! ```rust
//! let lon = natal::planets(946_728_000_000.0).unwrap();
//! let houses = natal::angles(946_728_000_000.0, 48.85, 2.35).unwrap();
//! assert!((0.0..360.0).contains(&lon.moon));
//! assert!((0.0..360.0).contains(&houses.ascendant));
//! ```
//!
//! Accuracy is that of the underlying low-precision series (about a degree at
//! worst for the Moon, a few arc minutes for the planets) and degrades outside
//! 1800–2050.

pub mod constants;
pub mod ephemeris;
pub mod houses;
pub mod kepler;
pub mod moon;
pub mod natal_errors;
pub mod orbit_type;
pub mod planetary_coefficients;
pub mod time;
pub mod vector;
pub mod zodiac;

pub use ephemeris::{planets, Body, PlanetLongitudes};
pub use houses::{angles, HouseAngles};
pub use natal_errors::NatalError;
