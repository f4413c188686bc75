//! # Time-linear element series
//!
//! Low-precision planetary theories publish each orbital element as a value at
//! J2000.0 plus a secular rate per Julian century. [`LinearElements`] stores these
//! `(value, rate)` pairs verbatim, in the published units (AU and degrees), and
//! evaluates them into a [`KeplerianElements`] set in radians.

use crate::{
    constants::{JulianCenturies, RADEG},
    orbit_type::keplerian_element::KeplerianElements,
};

/// A `(value at J2000.0, rate per Julian century)` pair.
pub type LinearTerm = (f64, f64);

/// Evaluate a single linear term at `centuries` since J2000.0.
#[inline]
pub fn evaluate_term((value, rate): LinearTerm, centuries: JulianCenturies) -> f64 {
    value + rate * centuries
}

/// Orbital elements as linear functions of time.
///
/// Units
/// -----
/// * `semi_major_axis`: AU and AU/century.
/// * `eccentricity`: unitless and 1/century.
/// * every angle: degrees and degrees/century.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LinearElements {
    pub semi_major_axis: LinearTerm,
    pub eccentricity: LinearTerm,
    pub inclination: LinearTerm,
    pub mean_longitude: LinearTerm,
    pub perihelion_longitude: LinearTerm,
    pub ascending_node_longitude: LinearTerm,
}

impl LinearElements {
    /// Evaluate every series at `centuries` since J2000.0.
    ///
    /// Angles are converted from degrees to radians; no range reduction is applied.
    pub fn at(&self, centuries: JulianCenturies) -> KeplerianElements {
        KeplerianElements {
            semi_major_axis: evaluate_term(self.semi_major_axis, centuries),
            eccentricity: evaluate_term(self.eccentricity, centuries),
            inclination: evaluate_term(self.inclination, centuries) * RADEG,
            mean_longitude: evaluate_term(self.mean_longitude, centuries) * RADEG,
            perihelion_longitude: evaluate_term(self.perihelion_longitude, centuries) * RADEG,
            ascending_node_longitude: evaluate_term(self.ascending_node_longitude, centuries)
                * RADEG,
        }
    }
}

#[cfg(test)]
mod linear_element_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SAMPLE: LinearElements = LinearElements {
        semi_major_axis: (1.5, 0.001),
        eccentricity: (0.1, -0.01),
        inclination: (2.0, 1.0),
        mean_longitude: (90.0, 36000.0),
        perihelion_longitude: (180.0, 0.5),
        ascending_node_longitude: (45.0, -1.0),
    };

    #[test]
    fn test_constant_terms_at_epoch() {
        let kep = SAMPLE.at(0.0);
        assert_eq!(kep.semi_major_axis, 1.5);
        assert_eq!(kep.eccentricity, 0.1);
        assert_abs_diff_eq!(kep.inclination, 2.0f64.to_radians(), epsilon = 1e-15);
        assert_abs_diff_eq!(kep.mean_longitude, std::f64::consts::FRAC_PI_2, epsilon = 1e-15);
        assert_abs_diff_eq!(kep.perihelion_longitude, std::f64::consts::PI, epsilon = 1e-15);
        assert_abs_diff_eq!(
            kep.ascending_node_longitude,
            std::f64::consts::FRAC_PI_4,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_rates() {
        let kep = SAMPLE.at(2.0);
        assert_abs_diff_eq!(kep.semi_major_axis, 1.502, epsilon = 1e-15);
        assert_abs_diff_eq!(kep.eccentricity, 0.08, epsilon = 1e-15);
        // no reduction: 90 + 72000 degrees stays unwrapped
        assert_abs_diff_eq!(kep.mean_longitude, 72_090.0 * RADEG, epsilon = 1e-9);
        assert_abs_diff_eq!(kep.ascending_node_longitude, 43.0 * RADEG, epsilon = 1e-15);
    }
}
