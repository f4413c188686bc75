#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use natal::{Body, PlanetLongitudes};

/// Unix milliseconds of J2000.0 (2000-01-01T12:00:00 UTC)
pub const J2000_MS: f64 = 946_728_000_000.0;

/// Milliseconds in one day
pub const DAY_MS: f64 = 86_400_000.0;

/// Signed difference `b - a` between two longitudes, in `(-180, 180]`.
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (b - a).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

pub fn assert_longitudes_close(actual: &PlanetLongitudes, expected: &[(Body, f64)], epsilon: f64) {
    for &(body, lon) in expected {
        assert_abs_diff_eq!(angle_diff(actual.get(body), lon), 0.0, epsilon = epsilon);
    }
}
