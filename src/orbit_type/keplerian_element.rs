//! # Keplerian orbital elements
//!
//! This module defines the [`crate::orbit_type::keplerian_element::KeplerianElements`] struct,
//! the element set consumed by the Kepler solver.
//!
//! ## Element set
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity (unitless)
//! 3. **I** – Inclination (radians)
//! 4. **L** – Mean longitude (radians)
//! 5. **ϖ** – Longitude of perihelion (radians)
//! 6. **Ω** – Longitude of ascending node (radians)
//!
//! The argument of perihelion and the mean anomaly are derived quantities:
//! `ω = ϖ − Ω` and `M = L − ϖ`. Neither is reduced to `[0, 2π)`.
//!
//! ## Domain
//!
//! Only elliptic orbits are supported. [`KeplerianElements::validate`] rejects
//! any eccentricity with `|e| ≥ 1` before the solver is called.
//!
//! A small negative `e` is accepted: linear element series evaluated far from
//! J2000.0 can cross zero (Saturn does after about T = +105.6). The solve then
//! describes the same ellipse with its perihelion turned by 180°.

use nalgebra::Vector3;

use crate::{
    constants::{AstronomicalUnit, Radian},
    kepler::{orbital_plane_position, rotate_to_ecliptic, solve_kepler_equation},
    natal_errors::NatalError,
};

/// Keplerian orbital elements evaluated at one instant.
///
/// Units
/// -----
/// * `semi_major_axis`: Astronomical Units (AU).
/// * `eccentricity`: unitless.
/// * `inclination`: radians.
/// * `mean_longitude`: radians (L).
/// * `perihelion_longitude`: radians (ϖ).
/// * `ascending_node_longitude`: radians (Ω).
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct KeplerianElements {
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub mean_longitude: Radian,
    pub perihelion_longitude: Radian,
    pub ascending_node_longitude: Radian,
}

impl KeplerianElements {
    /// Argument of perihelion `ω = ϖ − Ω`.
    pub fn periapsis_argument(&self) -> Radian {
        self.perihelion_longitude - self.ascending_node_longitude
    }

    /// Mean anomaly `M = L − ϖ`.
    pub fn mean_anomaly(&self) -> Radian {
        self.mean_longitude - self.perihelion_longitude
    }

    /// Check that the element set describes an ellipse.
    ///
    /// Return
    /// ------
    /// * `Err(NatalError::InvalidEccentricity)` if `e` is not finite or `|e| ≥ 1`.
    pub fn validate(&self) -> Result<(), NatalError> {
        if self.eccentricity.is_nan() || self.eccentricity.abs() >= 1.0 {
            return Err(NatalError::InvalidEccentricity(self.eccentricity));
        }
        Ok(())
    }

    /// Position of the body in the ecliptic frame of its central body.
    ///
    /// Solves Kepler's equation for the eccentric anomaly, places the body in its
    /// orbital plane, then rotates by `ω`, `I` and `Ω`.
    ///
    /// Return
    /// ------
    /// * Cartesian position in AU (same unit as `semi_major_axis`).
    ///
    /// Errors
    /// ------
    /// * [`NatalError::InvalidEccentricity`] for a non elliptic element set.
    /// * [`NatalError::KeplerNotConverged`] if the solver exceeds its iteration cap.
    pub fn to_ecliptic_position(&self) -> Result<Vector3<f64>, NatalError> {
        self.validate()?;

        let solution = solve_kepler_equation(self.mean_anomaly(), self.eccentricity)?;
        let (u, v) = orbital_plane_position(
            self.semi_major_axis,
            self.eccentricity,
            solution.eccentric_anomaly,
        );

        Ok(rotate_to_ecliptic(
            u,
            v,
            self.inclination,
            self.periapsis_argument(),
            self.ascending_node_longitude,
        ))
    }
}
