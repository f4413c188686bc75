//! Vector helpers shared by the ephemeris and the house angles.
//!
//! Angles are extracted with `atan2(−y, −x) + 180°`. Negating both axes and adding
//! half a turn returns the direction of `(x, y)` itself, mapped to `[0°, 360°)`
//! instead of `(−180°, 180°]`.

use nalgebra::Vector3;

use crate::constants::Degree;

/// Elementwise sum of two positions.
#[inline]
pub fn add(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a + b
}

/// Direction of the point `(x, y)` in degrees, in `[0, 360)`.
///
/// Arguments
/// ---------
/// * `y`: ordinate
/// * `x`: abscissa
///
/// Return
/// ------
/// * `atan2(−y, −x)` in degrees plus 180°. The single rounding case landing on
///   exactly 360° is folded back to 0°.
pub fn wrapped_atan2_deg(y: f64, x: f64) -> Degree {
    let angle = (-y).atan2(-x).to_degrees() + 180.0;
    if angle >= 360.0 {
        angle - 360.0
    } else {
        angle
    }
}

/// Ecliptic longitude of a position, in degrees in `[0, 360)`.
///
/// Only the projection on the XY (ecliptic) plane is used.
pub fn longitude(v: &Vector3<f64>) -> Degree {
    wrapped_atan2_deg(v.y, v.x)
}

#[cfg(test)]
mod vector_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_add() {
        let a = Vector3::new(1.0, -2.0, 0.5);
        let b = Vector3::new(0.25, 4.0, -0.5);
        assert_eq!(add(&a, &b), Vector3::new(1.25, 2.0, 0.0));
    }

    #[test]
    fn test_cardinal_longitudes() {
        assert_abs_diff_eq!(longitude(&Vector3::new(1.0, 0.0, 0.0)), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(longitude(&Vector3::new(0.0, 1.0, 0.0)), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(longitude(&Vector3::new(-1.0, 0.0, 0.0)), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(longitude(&Vector3::new(0.0, -1.0, 0.0)), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(longitude(&Vector3::new(1.0, 1.0, 7.0)), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_longitude_ignores_z() {
        let a = longitude(&Vector3::new(0.3, -0.4, 0.0));
        let b = longitude(&Vector3::new(0.3, -0.4, 12.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrap_at_360() {
        // just below the +x axis
        let lon = wrapped_atan2_deg(-1e-300, 1.0);
        assert!((0.0..360.0).contains(&lon));
    }

    proptest! {
        #[test]
        fn prop_longitude_in_range(x in -1e6f64..1e6, y in -1e6f64..1e6, z in -1e3f64..1e3) {
            let lon = longitude(&Vector3::new(x, y, z));
            prop_assert!((0.0..360.0).contains(&lon));
        }

        #[test]
        fn prop_add_then_subtract(
            ax in -1e3f64..1e3, ay in -1e3f64..1e3, az in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3, bz in -1e3f64..1e3,
        ) {
            let a = Vector3::new(ax, ay, az);
            let b = Vector3::new(bx, by, bz);
            let back = add(&add(&a, &b), &(-b));
            prop_assert!((back - a).norm() < 1e-9);
        }
    }
}
