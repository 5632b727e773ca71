//!
//! The human-readable duration parser.
//!


pub mod error;

use once_cell::sync::Lazy;
use regex::Regex;

use self::error::Error;

/// A single `<magnitude><unit>` component, e.g. `734us` or `1.5s`.
static COMPONENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<magnitude>[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?P<unit>[a-zA-Zµ]*)")
        .expect("Always valid")
});

///
/// Time units accepted by the parser.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Nanoseconds.
    Nanoseconds,
    /// Microseconds.
    Microseconds,
    /// Milliseconds.
    Milliseconds,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
}

impl Unit {
    ///
    /// The unit size in seconds.
    ///
    pub fn seconds(&self) -> f64 {
        match self {
            Self::Nanoseconds => 1e-9,
            Self::Microseconds => 1e-6,
            Self::Milliseconds => 1e-3,
            Self::Seconds => 1.0,
            Self::Minutes => 60.0,
            Self::Hours => 3600.0,
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = ();

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "ns" => Ok(Self::Nanoseconds),
            "us" | "µs" => Ok(Self::Microseconds),
            "ms" => Ok(Self::Milliseconds),
            "s" => Ok(Self::Seconds),
            "m" => Ok(Self::Minutes),
            "h" => Ok(Self::Hours),
            _ => Err(()),
        }
    }
}

///
/// Parses a compact duration such as `734us`, `1500ms` or `1m30s` into seconds.
///
/// Components are summed, so `2s500ms` yields `2.5`.
///
pub fn parse(text: &str) -> Result<f64, Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::Empty);
    }

    let mut seconds = 0.0;
    let mut offset = 0;
    while offset < trimmed.len() {
        let rest = &trimmed[offset..];
        let captures = COMPONENT.captures(rest).ok_or_else(|| Error::Malformed {
            text: text.to_owned(),
            offset,
        })?;

        let magnitude = &captures["magnitude"];
        let unit = &captures["unit"];
        let unit: Unit = unit.parse().map_err(|_| Error::UnknownUnit {
            text: text.to_owned(),
            unit: unit.to_owned(),
        })?;
        let magnitude: f64 = magnitude.parse().map_err(|_| Error::InvalidMagnitude {
            text: text.to_owned(),
            magnitude: magnitude.to_owned(),
        })?;

        seconds += magnitude * unit.seconds();
        offset += captures[0].len();
    }

    Ok(seconds)
}
