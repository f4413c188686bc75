//! Command line front end for the natal ephemeris.
//!
//! Usage:
//!   natal planets --date 2000-01-01T12:00:00 [--json]
//!   natal angles --date 946728000000 --lat 48.85 --lon 2.35 [--json]
//!
//! `--date` takes Unix milliseconds or any calendar string hifitime can parse,
//! and defaults to the current instant.

use clap::{Parser, Subcommand};

use natal::constants::UnixMillis;
use natal::time::{parse_instant, unix_ms_now};
use natal::zodiac::ZodiacPosition;
use natal::{angles, planets, NatalError};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Approximate planetary longitudes and house angles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Geocentric ecliptic longitudes of the Sun, the Moon and the planets
    Planets {
        /// Instant (Unix ms or calendar date), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Ascendant and midheaven for an observer
    Angles {
        /// Instant (Unix ms or calendar date), defaults to now
        #[arg(short, long)]
        date: Option<String>,

        /// Geographic latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Geographic longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
}

fn resolve_date(date: Option<&str>) -> std::result::Result<UnixMillis, NatalError> {
    match date {
        Some(text) => parse_instant(text),
        None => unix_ms_now(),
    }
}

/// Helper to print named values in a formatted way
fn print_longitude(name: &str, longitude: f64) {
    println!(
        "{:<10} {:>10.4}°  {}",
        name,
        longitude,
        ZodiacPosition::from_longitude(longitude)
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Planets { date } => {
            let ms = resolve_date(date.as_deref())?;
            let longitudes = planets(ms)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&longitudes)?);
            } else {
                for (body, lon) in longitudes.iter() {
                    print_longitude(body.name(), lon);
                }
            }
        }
        Command::Angles { date, lat, lon } => {
            let ms = resolve_date(date.as_deref())?;
            let houses = angles(ms, lat, lon)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&houses)?);
            } else {
                print_longitude("ascendant", houses.ascendant);
                print_longitude("midheaven", houses.midheaven);
            }
        }
    }

    Ok(())
}
