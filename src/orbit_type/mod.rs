//! # Orbital element representations
//!
//! This module defines the two element sets used by the ephemeris:
//!
//! - [`keplerian_element`](crate::orbit_type::keplerian_element): osculating elements
//!   `(a, e, I, L, ϖ, Ω)` already evaluated at a given instant, in radians. This is the
//!   input of the Kepler solver.
//! - [`linear_element`](crate::orbit_type::linear_element): element series of the form
//!   `value₀ + rate · T` (T in Julian centuries since J2000.0), in degrees, as published in
//!   low-precision planetary theories.
//!
//! ## Typical workflow
//!
//! ```rust
//! use natal::orbit_type::linear_element::LinearElements;
//!
//! let mars = LinearElements {
//!     semi_major_axis: (1.52371034, 0.00001847),
//!     eccentricity: (0.09339410, 0.00007882),
//!     inclination: (1.84969142, -0.00813131),
//!     mean_longitude: (-4.55343205, 19140.30268499),
//!     perihelion_longitude: (-23.94362959, 0.44441088),
//!     ascending_node_longitude: (49.55953891, -0.29257343),
//! };
//!
//! // Evaluate the series, then solve the two-body problem
//! let position = mars.at(0.25).to_ecliptic_position().unwrap();
//! assert!(position.norm() > 1.3 && position.norm() < 1.7);
//! ```

/// Osculating Keplerian elements and the conversion to a Cartesian position.
pub mod keplerian_element;

/// Time-linear element series.
pub mod linear_element;
