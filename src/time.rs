//! # Time normalization
//!
//! Every series in this crate is evaluated against the J2000.0 epoch
//! (2000-01-01T12:00:00 UTC). Instants enter the library as Unix milliseconds
//! and are reduced here to:
//!
//! * days since J2000.0, used by the sidereal time and obliquity formulas,
//! * Julian centuries since J2000.0, used by every orbital element series.
//!
//! The reduction is plain millisecond arithmetic: no leap seconds and no TT/UTC
//! offset are applied, the low-precision series do not resolve them anyway.
//!
//! [`hifitime`] is only used at the boundary, to turn calendar strings and
//! [`Epoch`] values into Unix milliseconds.

use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{
    JulianCenturies, UnixMillis, DAYS_PER_JULIAN_CENTURY, J2000_UNIX_MS, MILLISECONDS_PER_DAY,
};
use crate::natal_errors::NatalError;

/// Days elapsed since J2000.0 for an instant given in Unix milliseconds.
///
/// Arguments
/// ---------
/// * `unix_ms`: milliseconds since 1970-01-01T00:00:00 UTC
///
/// Return
/// ------
/// * days since 2000-01-01T12:00:00 UTC (negative before the epoch)
pub fn days_since_j2000(unix_ms: UnixMillis) -> f64 {
    (unix_ms - J2000_UNIX_MS) / MILLISECONDS_PER_DAY
}

/// Julian centuries elapsed since J2000.0 for an instant given in Unix milliseconds.
pub fn centuries_since_j2000(unix_ms: UnixMillis) -> JulianCenturies {
    days_since_j2000(unix_ms) / DAYS_PER_JULIAN_CENTURY
}

/// An instant reduced to the two time arguments used by the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisTime {
    /// Days since J2000.0
    pub days: f64,
    /// Julian centuries since J2000.0
    pub centuries: JulianCenturies,
}

impl EphemerisTime {
    /// Reduce a Unix millisecond timestamp.
    ///
    /// Return
    /// ------
    /// * `Err(NatalError::NonFiniteInput)` if `unix_ms` is NaN or infinite.
    ///   Any finite value is accepted, even far from the epoch.
    pub fn from_unix_ms(unix_ms: UnixMillis) -> Result<Self, NatalError> {
        if !unix_ms.is_finite() {
            return Err(NatalError::NonFiniteInput(format!("timestamp {unix_ms}")));
        }
        let days = days_since_j2000(unix_ms);
        Ok(EphemerisTime {
            days,
            centuries: days / DAYS_PER_JULIAN_CENTURY,
        })
    }
}

impl From<Epoch> for EphemerisTime {
    fn from(epoch: Epoch) -> Self {
        let days = days_since_j2000(epoch.to_unix_milliseconds());
        EphemerisTime {
            days,
            centuries: days / DAYS_PER_JULIAN_CENTURY,
        }
    }
}

/// Parse a user supplied instant into Unix milliseconds.
///
/// Accepted forms:
/// * a plain number, read as Unix milliseconds (`"946728000000"`),
/// * any calendar string understood by [`Epoch::from_str`]
///   (`"2000-01-01T12:00:00 UTC"`, `"2024-03-20T03:06:00"`, ...).
///
/// Return
/// ------
/// * the instant as Unix milliseconds, or `NatalError::InvalidDate`.
pub fn parse_instant(input: &str) -> Result<UnixMillis, NatalError> {
    let trimmed = input.trim();
    if let Ok(ms) = trimmed.parse::<f64>() {
        if !ms.is_finite() {
            return Err(NatalError::InvalidDate(trimmed.to_string()));
        }
        return Ok(ms);
    }

    Epoch::from_str(trimmed)
        .map(|epoch| epoch.to_unix_milliseconds())
        .map_err(|err| NatalError::InvalidDate(format!("{trimmed} ({err})")))
}

/// Current instant as Unix milliseconds.
pub fn unix_ms_now() -> Result<UnixMillis, NatalError> {
    Ok(Epoch::now()?.to_unix_milliseconds())
}
