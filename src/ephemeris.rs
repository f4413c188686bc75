//! # Planetary ephemeris
//!
//! Apparent geocentric ecliptic longitudes of the Sun, the Moon and the five
//! naked-eye planets, from low-precision analytical elements.
//!
//! ## Pipeline
//!
//! 1. The instant is reduced once to Julian centuries since J2000.0
//!    ([`crate::time`]).
//! 2. The Sun's apparent geocentric orbit is solved, giving `sun_pos`.
//! 3. The Moon's elements are corrected with their periodic terms
//!    ([`crate::moon`]) and solved directly in geocentric form.
//! 4. Each planet is solved heliocentrically and translated by `sun_pos`.
//! 5. Every position is projected to a longitude ([`crate::vector::longitude`]).
//!
//! Every function is pure: no state is kept between calls, and the coefficient
//! tables are immutable constants.
//!
//! ## Example
//!
//! ```rust
//! use natal::ephemeris::{planets, Body};
//!
//! // J2000.0
//! let lon = planets(946_728_000_000.0).unwrap();
//! assert!((lon.get(Body::Sun) - 280.38).abs() < 0.01);
//! ```

use log::debug;
use nalgebra::Vector3;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::{
    constants::{Degree, JulianCenturies, UnixMillis},
    moon::moon_elements,
    natal_errors::NatalError,
    orbit_type::linear_element::LinearElements,
    planetary_coefficients::{JUPITER, MARS, MERCURY, SATURN, SUN, VENUS},
    time::EphemerisTime,
    vector::{add, longitude},
};

/// Bodies covered by the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Body {
    /// Every body, in output order.
    pub const ALL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    /// Lowercase name, as used in the output mapping.
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
        }
    }

    /// Heliocentric element series of a planet, `None` for the Sun and the Moon.
    fn heliocentric_elements(&self) -> Option<&'static LinearElements> {
        match self {
            Body::Mercury => Some(&MERCURY),
            Body::Venus => Some(&VENUS),
            Body::Mars => Some(&MARS),
            Body::Jupiter => Some(&JUPITER),
            Body::Saturn => Some(&SATURN),
            Body::Sun | Body::Moon => None,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Body {
    type Err = NatalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Body::ALL
            .into_iter()
            .find(|body| body.name() == wanted)
            .ok_or_else(|| NatalError::UnknownBody(s.to_string()))
    }
}

/// Geocentric ecliptic longitudes in degrees, each in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetLongitudes {
    pub sun: Degree,
    pub moon: Degree,
    pub mercury: Degree,
    pub venus: Degree,
    pub mars: Degree,
    pub jupiter: Degree,
    pub saturn: Degree,
}

impl PlanetLongitudes {
    pub fn get(&self, body: Body) -> Degree {
        match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
            Body::Mercury => self.mercury,
            Body::Venus => self.venus,
            Body::Mars => self.mars,
            Body::Jupiter => self.jupiter,
            Body::Saturn => self.saturn,
        }
    }

    /// `(body, longitude)` pairs in [`Body::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Body, Degree)> + '_ {
        Body::ALL.into_iter().map(move |body| (body, self.get(body)))
    }
}

/// Apparent geocentric position of the Sun (AU, ecliptic frame).
pub fn sun_position(centuries: JulianCenturies) -> Result<Vector3<f64>, NatalError> {
    SUN.at(centuries).to_ecliptic_position()
}

/// Geocentric position of the Moon (AU, ecliptic frame).
pub fn moon_position(centuries: JulianCenturies) -> Result<Vector3<f64>, NatalError> {
    moon_elements(centuries).to_ecliptic_position()
}

/// Geocentric position of a body (AU, ecliptic frame).
///
/// Planets are solved heliocentrically, then translated by the Sun's geocentric
/// position.
pub fn geocentric_position(
    body: Body,
    centuries: JulianCenturies,
) -> Result<Vector3<f64>, NatalError> {
    match body {
        Body::Sun => sun_position(centuries),
        Body::Moon => moon_position(centuries),
        planet => {
            let sun_pos = sun_position(centuries)?;
            planet_position(planet, centuries, &sun_pos)
        }
    }
}

fn planet_position(
    planet: Body,
    centuries: JulianCenturies,
    sun_pos: &Vector3<f64>,
) -> Result<Vector3<f64>, NatalError> {
    let elements = planet
        .heliocentric_elements()
        .ok_or_else(|| NatalError::UnknownBody(planet.to_string()))?;
    let heliocentric = elements.at(centuries).to_ecliptic_position()?;
    Ok(add(&heliocentric, sun_pos))
}

/// Longitude of a single body at a Unix millisecond timestamp.
pub fn body_longitude(body: Body, unix_ms: UnixMillis) -> Result<Degree, NatalError> {
    let time = EphemerisTime::from_unix_ms(unix_ms)?;
    Ok(longitude(&geocentric_position(body, time.centuries)?))
}

/// Longitudes of the Sun, the Moon and the five planets at a Unix millisecond timestamp.
///
/// Arguments
/// ---------
/// * `unix_ms`: milliseconds since 1970-01-01T00:00:00 UTC
///
/// Return
/// ------
/// * [`PlanetLongitudes`], every value in degrees in `[0, 360)`.
///
/// Errors
/// ------
/// * [`NatalError::NonFiniteInput`] for a NaN or infinite timestamp.
/// * [`NatalError::KeplerNotConverged`] if the solver exceeds its iteration cap.
///
/// Finite instants far from J2000.0 are not rejected: the linear series keep
/// `|e|` well below 1 for tens of thousands of years and the result only loses
/// accuracy. An eccentricity series crossing zero is solved as is.
pub fn planets(unix_ms: UnixMillis) -> Result<PlanetLongitudes, NatalError> {
    let time = EphemerisTime::from_unix_ms(unix_ms)?;
    let t = time.centuries;

    let sun_pos = sun_position(t)?;
    let planet_longitude = |planet: Body| -> Result<Degree, NatalError> {
        let lon = longitude(&planet_position(planet, t, &sun_pos)?);
        debug!("{planet}: {lon:.6}° at T = {t}");
        Ok(lon)
    };

    let result = PlanetLongitudes {
        sun: longitude(&sun_pos),
        moon: longitude(&moon_position(t)?),
        mercury: planet_longitude(Body::Mercury)?,
        venus: planet_longitude(Body::Venus)?,
        mars: planet_longitude(Body::Mars)?,
        jupiter: planet_longitude(Body::Jupiter)?,
        saturn: planet_longitude(Body::Saturn)?,
    };
    debug!("sun: {:.6}°, moon: {:.6}° at T = {t}", result.sun, result.moon);

    Ok(result)
}
