//! Tropical zodiac formatting of ecliptic longitudes.

use serde::Serialize;
use std::fmt;

use crate::constants::Degree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

/// A longitude split into sign, whole degrees and arc minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacPosition {
    pub sign: Sign,
    /// Whole degrees inside the sign, `0..30`
    pub degrees: u8,
    /// Truncated arc minutes, `0..60`
    pub minutes: u8,
}

impl ZodiacPosition {
    /// Any finite longitude is accepted and reduced to `[0, 360)` first.
    pub fn from_longitude(longitude: Degree) -> Self {
        let lon = longitude.rem_euclid(360.0);
        // rem_euclid may round up to exactly 360 for tiny negative inputs
        let total_minutes = ((lon * 60.0).floor() as u32) % (360 * 60);
        let index = (total_minutes / (30 * 60)) as usize;
        let in_sign = total_minutes % (30 * 60);

        ZodiacPosition {
            sign: Sign::ALL[index],
            degrees: (in_sign / 60) as u8,
            minutes: (in_sign % 60) as u8,
        }
    }
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}°{:02}' {}", self.degrees, self.minutes, self.sign.name())
    }
}
