//! # Lunar elements
//!
//! The Moon is handled by the same Kepler solver as the planets, with a geocentric
//! element set whose mean values ([`MOON_BASE`]) receive periodic corrections driven
//! by four fundamental arguments:
//!
//! * `D` – mean elongation of the Moon from the Sun,
//! * `F` – mean argument of latitude of the Moon,
//! * `l` – mean anomaly of the Moon,
//! * `M` – mean anomaly of the Sun.
//!
//! The correction loop is generic over the term table, so the table can be checked
//! independently of its contents.

use crate::{
    constants::{JulianCenturies, Radian, RADEG},
    orbit_type::{keplerian_element::KeplerianElements, linear_element::evaluate_term},
    planetary_coefficients::{
        MoonElement, PeriodicTerm, Trig, ARGUMENT_OF_LATITUDE, MEAN_ELONGATION, MOON_BASE,
        MOON_MEAN_ANOMALY, MOON_PERIODIC_TERMS, SUN_MEAN_ANOMALY,
    },
};

/// Fundamental lunar arguments, in radians (not reduced).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    pub d: Radian,
    pub f: Radian,
    pub l: Radian,
    pub m: Radian,
}

impl LunarArguments {
    /// Evaluate the four linear arguments at `centuries` since J2000.0.
    pub fn at(centuries: JulianCenturies) -> Self {
        LunarArguments {
            d: evaluate_term(MEAN_ELONGATION, centuries) * RADEG,
            f: evaluate_term(ARGUMENT_OF_LATITUDE, centuries) * RADEG,
            l: evaluate_term(MOON_MEAN_ANOMALY, centuries) * RADEG,
            m: evaluate_term(SUN_MEAN_ANOMALY, centuries) * RADEG,
        }
    }

    /// Linear combination `n_D·D + n_F·F + n_l·l + n_M·M`.
    pub fn combine(&self, [n_d, n_f, n_l, n_m]: [i8; 4]) -> Radian {
        f64::from(n_d) * self.d
            + f64::from(n_f) * self.f
            + f64::from(n_l) * self.l
            + f64::from(n_m) * self.m
    }
}

/// Value of one periodic term, in the unit of its amplitude.
pub fn periodic_correction(term: &PeriodicTerm, args: &LunarArguments) -> f64 {
    let angle = args.combine(term.multipliers);
    let wave = match term.function {
        Trig::Sin => angle.sin(),
        Trig::Cos => angle.cos(),
    };
    term.amplitude * wave
}

/// Add a table of periodic terms to an element set.
///
/// Angular amplitudes are in degrees, eccentricity amplitudes are unitless.
pub fn apply_periodic_terms(
    base: KeplerianElements,
    terms: &[PeriodicTerm],
    args: &LunarArguments,
) -> KeplerianElements {
    terms.iter().fold(base, |mut elements, term| {
        let value = periodic_correction(term, args);
        match term.element {
            MoonElement::Eccentricity => elements.eccentricity += value,
            MoonElement::MeanLongitude => elements.mean_longitude += value * RADEG,
            MoonElement::PerihelionLongitude => elements.perihelion_longitude += value * RADEG,
            MoonElement::AscendingNode => elements.ascending_node_longitude += value * RADEG,
        }
        elements
    })
}

/// Geocentric osculating elements of the Moon at `centuries` since J2000.0.
pub fn moon_elements(centuries: JulianCenturies) -> KeplerianElements {
    let args = LunarArguments::at(centuries);
    apply_periodic_terms(MOON_BASE.at(centuries), &MOON_PERIODIC_TERMS, &args)
}
