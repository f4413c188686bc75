//! # House angles
//!
//! Ascendant and midheaven for an observer, from the local sidereal time and the
//! obliquity of the ecliptic.
//!
//! Both are linear in days since J2000.0:
//!
//! * `LST = 4.8949613 + 6.3003880989482·d + λ` (radians, λ the east longitude),
//! * `ε = 0.409093 − 0.000000007·d` (radians).
//!
//! Then, with φ the geographic latitude,
//!
//! * `ASC = atan2(cos LST, −(sin ε·tan φ + cos ε·sin LST))`,
//! * `MC  = atan2(sin LST, cos LST·cos ε)`,
//!
//! both mapped to `[0°, 360°)` with [`wrapped_atan2_deg`].
//!
//! Latitudes close to ±90° make `tan φ` blow up; the result is then numerically
//! meaningless but still an angle in range.

use serde::Serialize;

use crate::{
    constants::{Degree, Radian, UnixMillis, RADEG},
    natal_errors::NatalError,
    time::EphemerisTime,
    vector::wrapped_atan2_deg,
};

/// Greenwich mean sidereal time at J2000.0, radians.
const SIDEREAL_TIME_AT_EPOCH: f64 = 4.8949613;
/// Sidereal rotation per day, radians.
const SIDEREAL_RATE: f64 = 6.3003880989482;
/// Obliquity of the ecliptic at J2000.0, radians.
const OBLIQUITY_AT_EPOCH: f64 = 0.409093;
/// Obliquity drift per day, radians.
const OBLIQUITY_RATE: f64 = 0.000000007;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseAngles {
    pub ascendant: Degree,
    pub midheaven: Degree,
}

/// Local sidereal time in radians (not reduced).
///
/// Arguments
/// ---------
/// * `days`: days since J2000.0
/// * `longitude`: observer east longitude in degrees
pub fn local_sidereal_time(days: f64, longitude: Degree) -> Radian {
    SIDEREAL_TIME_AT_EPOCH + SIDEREAL_RATE * days + longitude * RADEG
}

/// Obliquity of the ecliptic in radians, `days` since J2000.0.
pub fn obliquity(days: f64) -> Radian {
    OBLIQUITY_AT_EPOCH - OBLIQUITY_RATE * days
}

/// Ascendant in degrees for a local sidereal time, obliquity and latitude (degrees).
pub fn ascendant(lst: Radian, obliquity: Radian, latitude: Degree) -> Degree {
    let y = lst.cos();
    let x = -(obliquity.sin() * (latitude * RADEG).tan() + obliquity.cos() * lst.sin());
    wrapped_atan2_deg(y, x)
}

/// Midheaven in degrees for a local sidereal time and obliquity.
pub fn midheaven(lst: Radian, obliquity: Radian) -> Degree {
    wrapped_atan2_deg(lst.sin(), lst.cos() * obliquity.cos())
}

/// Ascendant and midheaven for an instant and an observer.
///
/// Arguments
/// ---------
/// * `unix_ms`: milliseconds since 1970-01-01T00:00:00 UTC
/// * `latitude`: geographic latitude in degrees, north positive
/// * `longitude`: geographic longitude in degrees, east positive
///
/// Return
/// ------
/// * [`HouseAngles`] with both angles in `[0, 360)`, or
///   [`NatalError::NonFiniteInput`] if any argument is NaN or infinite.
///
/// Ranges are conventional only: `latitude ∈ [−90, 90]` and
/// `longitude ∈ [−180, 180]` are not enforced.
pub fn angles(
    unix_ms: UnixMillis,
    latitude: Degree,
    longitude: Degree,
) -> Result<HouseAngles, NatalError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(NatalError::NonFiniteInput(format!(
            "observer at latitude {latitude}, longitude {longitude}"
        )));
    }
    let time = EphemerisTime::from_unix_ms(unix_ms)?;

    let lst = local_sidereal_time(time.days, longitude);
    let eps = obliquity(time.days);

    Ok(HouseAngles {
        ascendant: ascendant(lst, eps, latitude),
        midheaven: midheaven(lst, eps),
    })
}

#[cfg(test)]
mod houses_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_equinox_on_meridian() {
        // LST = 0: 0° Aries culminates and 0° Cancer rises at the equator
        let eps = obliquity(0.0);
        assert_abs_diff_eq!(midheaven(0.0, eps), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ascendant(0.0, eps, 0.0), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sidereal_time_and_obliquity() {
        assert_eq!(local_sidereal_time(0.0, 0.0), 4.8949613);
        assert_abs_diff_eq!(
            local_sidereal_time(1.0, 90.0),
            4.8949613 + 6.3003880989482 + std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
        assert_eq!(obliquity(0.0), 0.409093);
        assert_abs_diff_eq!(obliquity(36525.0), 0.409093 - 0.000255675, epsilon = 1e-15);
    }

    #[test]
    fn test_longitude_shifts_sidereal_time() {
        // 15° east is one sidereal hour ahead
        let a = angles(946_728_000_000.0, 10.0, 15.0).unwrap();
        let lst = local_sidereal_time(0.0, 15.0);
        assert_abs_diff_eq!(a.midheaven, midheaven(lst, obliquity(0.0)), epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_observer() {
        assert!(matches!(
            angles(946_728_000_000.0, f64::NAN, 0.0),
            Err(NatalError::NonFiniteInput(_))
        ));
        assert!(angles(946_728_000_000.0, 0.0, f64::INFINITY).is_err());
        assert!(angles(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_pole_still_in_range() {
        let a = angles(946_728_000_000.0, 90.0, 0.0).unwrap();
        assert!((0.0..360.0).contains(&a.ascendant));
        assert!((0.0..360.0).contains(&a.midheaven));
    }

    proptest! {
        #[test]
        fn prop_angles_in_range(
            days in -40_000.0f64..40_000.0,
            lat in -89.9f64..89.9,
            lon in -180.0f64..180.0,
        ) {
            let ms = 946_728_000_000.0 + days * 86_400_000.0;
            let a = angles(ms, lat, lon).unwrap();
            prop_assert!((0.0..360.0).contains(&a.ascendant));
            prop_assert!((0.0..360.0).contains(&a.midheaven));
        }

        #[test]
        fn prop_midheaven_same_quadrant_as_lst(lst in 0.0f64..std::f64::consts::TAU) {
            // MC and RAMC differ by less than 3° for ε ≈ 23.4°
            let mc = midheaven(lst, obliquity(0.0));
            let diff = (mc - lst.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
            prop_assert!(diff.abs() < 3.0);
        }
    }
}
