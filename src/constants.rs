//! # Constants and type definitions for natal
//!
//! This module centralizes the **time origins**, **conversion factors**, and **common type
//! aliases** used throughout the `natal` library.
//!
//! ## Overview
//!
//! - Reference epoch (J2000.0) expressed in Unix milliseconds
//! - Unit conversions (degrees ↔ radians, milliseconds ↔ days, days ↔ Julian centuries)
//! - Core type aliases used across the crate
//!
//! Orbital coefficient tables are not defined here, see
//! [`crate::planetary_coefficients`].

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Number of milliseconds in a day of 86 400 seconds
pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Unix timestamp (milliseconds) of J2000.0, 2000-01-01T12:00:00 UTC
pub const J2000_UNIX_MS: f64 = 946_728_000_000.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Milliseconds elapsed since the Unix epoch
pub type UnixMillis = f64;
/// Julian centuries elapsed since J2000.0
pub type JulianCenturies = f64;
