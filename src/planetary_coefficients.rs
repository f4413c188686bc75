//! # Orbital coefficient tables
//!
//! Read-only data feeding [`crate::ephemeris`]. Nothing in this module computes;
//! the evaluation loops live next to their callers.
//!
//! ## Planets
//!
//! Mean elements and secular rates from E. M. Standish, *Keplerian Elements for
//! Approximate Positions of the Major Planets* (JPL), table 1, valid 1800 AD – 2050 AD.
//! Units: AU, AU/century, degrees, degrees/century.
//!
//! The Sun row is the Earth–Moon barycentre row turned around by 180° in mean
//! longitude and perihelion, with inclination and node pinned to zero: the
//! resulting orbit is the apparent geocentric orbit of the Sun, and adding a
//! heliocentric planet position to it gives the planet's geocentric position.
//!
//! ## Moon
//!
//! Mean lunar elements (Meeus, *Astronomical Algorithms*, ch. 47) with periodic
//! corrections in the fundamental arguments `D`, `F`, `l`, `M`:
//!
//! * evection, expressed as oscillations of the eccentricity and the perigee,
//! * variation, annual equation and the next largest longitude terms on `L`,
//! * the true-node terms on `Ω`.
//!
//! The equation of centre and the reduction to the ecliptic are not listed: the
//! Kepler solve and the inclined orbit produce them.

use crate::{
    constants::AU,
    orbit_type::linear_element::{LinearElements, LinearTerm},
};

use MoonElement::*;
use Trig::*;

/// Sun, seen from the Earth (ecliptic of J2000.0).
pub const SUN: LinearElements = LinearElements {
    semi_major_axis: (1.00000261, 0.00000562),
    eccentricity: (0.01671123, -0.00004392),
    inclination: (0.0, 0.0),
    mean_longitude: (280.46457166, 35999.37244981),
    perihelion_longitude: (282.93768193, 0.32327364),
    ascending_node_longitude: (0.0, 0.0),
};

pub const MERCURY: LinearElements = LinearElements {
    semi_major_axis: (0.38709927, 0.00000037),
    eccentricity: (0.20563593, 0.00001906),
    inclination: (7.00497902, -0.00594749),
    mean_longitude: (252.25032350, 149472.67411175),
    perihelion_longitude: (77.45779628, 0.16047689),
    ascending_node_longitude: (48.33076593, -0.12534081),
};

pub const VENUS: LinearElements = LinearElements {
    semi_major_axis: (0.72333566, 0.00000390),
    eccentricity: (0.00677672, -0.00004107),
    inclination: (3.39467605, -0.00078890),
    mean_longitude: (181.97909950, 58517.81538729),
    perihelion_longitude: (131.60246718, 0.00268329),
    ascending_node_longitude: (76.67984255, -0.27769418),
};

pub const MARS: LinearElements = LinearElements {
    semi_major_axis: (1.52371034, 0.00001847),
    eccentricity: (0.09339410, 0.00007882),
    inclination: (1.84969142, -0.00813131),
    mean_longitude: (-4.55343205, 19140.30268499),
    perihelion_longitude: (-23.94362959, 0.44441088),
    ascending_node_longitude: (49.55953891, -0.29257343),
};

pub const JUPITER: LinearElements = LinearElements {
    semi_major_axis: (5.20288700, -0.00011607),
    eccentricity: (0.04838624, -0.00013253),
    inclination: (1.30439695, -0.00183714),
    mean_longitude: (34.39644051, 3034.74612775),
    perihelion_longitude: (14.72847983, 0.21252668),
    ascending_node_longitude: (100.47390909, 0.20469106),
};

pub const SATURN: LinearElements = LinearElements {
    semi_major_axis: (9.53667594, -0.00125060),
    eccentricity: (0.05386179, -0.00050991),
    inclination: (2.48599187, 0.00193609),
    mean_longitude: (49.95424423, 1222.49362201),
    perihelion_longitude: (92.59887831, -0.41897216),
    ascending_node_longitude: (113.66242448, -0.28867794),
};

/// Mean distance of the Moon, km.
pub const MOON_MEAN_DISTANCE: f64 = 384_400.0;

/// Mean geocentric elements of the Moon.
pub const MOON_BASE: LinearElements = LinearElements {
    semi_major_axis: (MOON_MEAN_DISTANCE / AU, 0.0),
    eccentricity: (0.054900, 0.0),
    inclination: (5.1454, 0.0),
    mean_longitude: (218.3164477, 481267.88123421),
    perihelion_longitude: (83.3532465, 4069.0137287),
    ascending_node_longitude: (125.0445479, -1934.1362891),
};

/// Mean elongation of the Moon `D`, degrees and degrees/century.
pub const MEAN_ELONGATION: LinearTerm = (297.8501921, 445267.1114034);
/// Argument of latitude of the Moon `F`.
pub const ARGUMENT_OF_LATITUDE: LinearTerm = (93.2720950, 483202.0175233);
/// Mean anomaly of the Moon `l`.
pub const MOON_MEAN_ANOMALY: LinearTerm = (134.9633964, 477198.8675055);
/// Mean anomaly of the Sun `M`.
pub const SUN_MEAN_ANOMALY: LinearTerm = (357.5291092, 35999.0502909);

/// Lunar element receiving a periodic correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonElement {
    Eccentricity,
    MeanLongitude,
    PerihelionLongitude,
    AscendingNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trig {
    Sin,
    Cos,
}

/// One periodic correction: `amplitude · f(n_D·D + n_F·F + n_l·l + n_M·M)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub element: MoonElement,
    /// Degrees for angular elements, unitless for the eccentricity
    pub amplitude: f64,
    pub function: Trig,
    /// Integer multipliers of `[D, F, l, M]`
    pub multipliers: [i8; 4],
}

const fn term(
    element: MoonElement,
    amplitude: f64,
    function: Trig,
    multipliers: [i8; 4],
) -> PeriodicTerm {
    PeriodicTerm {
        element,
        amplitude,
        function,
        multipliers,
    }
}

/// Periodic corrections to [`MOON_BASE`].
pub const MOON_PERIODIC_TERMS: [PeriodicTerm; 16] = [
    // evection
    term(Eccentricity, 0.011115, Cos, [2, 0, -2, 0]),
    term(PerihelionLongitude, -11.60, Sin, [2, 0, -2, 0]),
    // variation
    term(MeanLongitude, 0.6583, Sin, [2, 0, 0, 0]),
    // annual equation
    term(MeanLongitude, -0.1856, Sin, [0, 0, 0, 1]),
    term(MeanLongitude, 0.0588, Sin, [2, 0, -2, 0]),
    term(MeanLongitude, 0.0572, Sin, [2, 0, -1, -1]),
    term(MeanLongitude, 0.0533, Sin, [2, 0, 1, 0]),
    term(MeanLongitude, 0.0458, Sin, [2, 0, 0, -1]),
    term(MeanLongitude, 0.0409, Sin, [0, 0, 1, -1]),
    // parallactic inequality
    term(MeanLongitude, -0.0347, Sin, [1, 0, 0, 0]),
    term(MeanLongitude, -0.0304, Sin, [0, 0, 1, 1]),
    // true node
    term(AscendingNode, -1.4979, Sin, [2, -2, 0, 0]),
    term(AscendingNode, -0.1500, Sin, [0, 0, 0, 1]),
    term(AscendingNode, -0.1226, Sin, [2, 0, 0, 0]),
    term(AscendingNode, 0.1176, Sin, [0, 2, 0, 0]),
    term(AscendingNode, -0.0801, Sin, [0, -2, 2, 0]),
];
