//! # Kepler equation and orbital-plane geometry
//!
//! Solves `M = E - e·sin(E)` for the eccentric anomaly `E` with a Newton–Raphson
//! iteration, then maps the solution to a position in the ecliptic frame.
//!
//! The iteration starts from `E₀ = M + e·sin(M)` and stops as soon as the
//! correction satisfies `|dE| ≤ 2e-8` rad. No range reduction is applied to the
//! mean anomaly: every trigonometric call is periodic, so any real `M` works.
//!
//! The loop is capped at [`MAX_ITERATIONS`]. For `|e| < 1` convergence is
//! quadratic and happens within a handful of steps; hitting the cap returns
//! [`NatalError::KeplerNotConverged`] instead of looping forever.

use log::{debug, trace, warn};
use nalgebra::Vector3;

use super::constants::{AstronomicalUnit, Radian};
use crate::natal_errors::NatalError;

/// Stop threshold on the Newton correction, in radians.
pub const CONVERGENCE_THRESHOLD: f64 = 2e-8;

/// Hard cap on Newton iterations.
pub const MAX_ITERATIONS: usize = 50;

/// Result of a Kepler equation solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly `E` (radians, not reduced)
    pub eccentric_anomaly: Radian,
    /// Number of Newton updates applied
    pub iterations: usize,
}

/// Solve Kepler's equation for an elliptic orbit.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians (any real value)
/// * `eccentricity`: eccentricity `e`, expected in `(-1, 1)`
///
/// Return
/// ------
/// * a [`KeplerSolution`] holding `E` and the iteration count, or
///   [`NatalError::KeplerNotConverged`] when [`MAX_ITERATIONS`] is exceeded.
///
/// Remarks
/// -------
/// * The eccentricity is not checked here, see
///   [`KeplerianElements::validate`](crate::orbit_type::keplerian_element::KeplerianElements::validate).
/// * With `e = 0` the first correction is exactly zero and `E = M`.
pub fn solve_kepler_equation(
    mean_anomaly: Radian,
    eccentricity: f64,
) -> Result<KeplerSolution, NatalError> {
    let mut ecc_anomaly = mean_anomaly + eccentricity * mean_anomaly.sin();

    for iteration in 1..=MAX_ITERATIONS {
        let dm = mean_anomaly - (ecc_anomaly - eccentricity * ecc_anomaly.sin());
        let de = dm / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly += de;

        trace!("kepler iteration {iteration}: E = {ecc_anomaly}, dE = {de}");

        if de.abs() <= CONVERGENCE_THRESHOLD {
            debug!(
                "kepler converged in {iteration} iterations (M = {mean_anomaly}, e = {eccentricity})"
            );
            return Ok(KeplerSolution {
                eccentric_anomaly: ecc_anomaly,
                iterations: iteration,
            });
        }
    }

    warn!("kepler did not converge (M = {mean_anomaly}, e = {eccentricity})");
    Err(NatalError::KeplerNotConverged {
        iterations: MAX_ITERATIONS,
        mean_anomaly,
        eccentricity,
    })
}

/// Coordinates in the orbital plane, x axis towards the perihelion.
///
/// Return
/// ------
/// * `(u, v)` with `u = a·(cos E − e)` and `v = a·√(1−e²)·sin E`
pub fn orbital_plane_position(
    semi_major_axis: AstronomicalUnit,
    eccentricity: f64,
    eccentric_anomaly: Radian,
) -> (f64, f64) {
    let u = semi_major_axis * (eccentric_anomaly.cos() - eccentricity);
    let v = semi_major_axis * (1.0 - eccentricity.powi(2)).sqrt() * eccentric_anomaly.sin();
    (u, v)
}

/// Rotate orbital-plane coordinates into the ecliptic frame.
///
/// Applies `Rz(Ω) · Rx(I) · Rz(ω)` to `(u, v, 0)`.
///
/// Arguments
/// ---------
/// * `u`, `v`: orbital-plane coordinates
/// * `inclination`: `I` in radians
/// * `periapsis_argument`: `ω = ϖ − Ω` in radians
/// * `ascending_node`: `Ω` in radians
pub fn rotate_to_ecliptic(
    u: f64,
    v: f64,
    inclination: Radian,
    periapsis_argument: Radian,
    ascending_node: Radian,
) -> Vector3<f64> {
    let (sin_w, cos_w) = periapsis_argument.sin_cos();
    let (sin_n, cos_n) = ascending_node.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();

    let x = u * (cos_w * cos_n - sin_w * sin_n * cos_i) - v * (sin_w * cos_n + cos_w * sin_n * cos_i);
    let y = u * (cos_w * sin_n + sin_w * cos_n * cos_i) - v * (sin_w * sin_n - cos_w * cos_n * cos_i);
    let z = u * sin_w * sin_i + v * cos_w * sin_i;

    Vector3::new(x, y, z)
}
