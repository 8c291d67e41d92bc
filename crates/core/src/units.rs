//! Unit enumerations for length, speed, temperature, pressure, and speed type
//!
//! Each family is a closed enum validated once at the parse boundary
//! ([`std::str::FromStr`]); internal functions always take the enum, never
//! a raw string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Length (altitude) units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Feet
    Ft,
    /// Meters
    M,
    /// Kilometers
    Km,
    /// Statute miles
    Sm,
    /// Nautical miles
    Nm,
}

impl LengthUnit {
    /// Canonical lowercase tag, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ft => "ft",
            Self::M => "m",
            Self::Km => "km",
            Self::Sm => "sm",
            Self::Nm => "nm",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "ft" => Ok(Self::Ft),
            "m" => Ok(Self::M),
            "km" => Ok(Self::Km),
            "sm" => Ok(Self::Sm),
            "nm" => Ok(Self::Nm),
            other => Err(Error::UnknownUnit {
                family: "length",
                token: other.to_string(),
            }),
        }
    }
}

/// Pressure units for altimeter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    /// Hectopascals
    #[serde(rename = "hPa")]
    Hpa,
    /// Inches of mercury
    #[serde(rename = "inHg")]
    InHg,
}

impl PressureUnit {
    /// Canonical tag, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hpa => "hPa",
            Self::InHg => "inHg",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PressureUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "hPa" => Ok(Self::Hpa),
            "inHg" => Ok(Self::InHg),
            other => Err(Error::UnknownUnit {
                family: "pressure",
                token: other.to_string(),
            }),
        }
    }
}

/// Speed units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    /// Knots
    Kts,
    /// Feet per second
    Fps,
    /// Statute miles per hour
    Mph,
    /// Meters per second
    Mps,
    /// Kilometers per hour
    Kmh,
}

impl SpeedUnit {
    /// Canonical lowercase tag, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kts => "kts",
            Self::Fps => "fps",
            Self::Mph => "mph",
            Self::Mps => "mps",
            Self::Kmh => "kmh",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeedUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "kts" => Ok(Self::Kts),
            "fps" => Ok(Self::Fps),
            "mph" => Ok(Self::Mph),
            "mps" => Ok(Self::Mps),
            "kmh" => Ok(Self::Kmh),
            other => Err(Error::UnknownUnit {
                family: "speed",
                token: other.to_string(),
            }),
        }
    }
}

/// Temperature units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius
    C,
    /// Degrees Fahrenheit
    F,
    /// Kelvin
    K,
    /// Degrees Rankine
    R,
}

impl TemperatureUnit {
    /// Canonical tag, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::F => "F",
            Self::K => "K",
            Self::R => "R",
        }
    }

    /// True for the Fahrenheit/Rankine family, whose degree is 1/1.8 of
    /// a Celsius/Kelvin degree.
    pub(crate) fn is_fahrenheit_family(self) -> bool {
        matches!(self, Self::F | Self::R)
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "C" => Ok(Self::C),
            "F" => Ok(Self::F),
            "K" => Ok(Self::K),
            "R" => Ok(Self::R),
            other => Err(Error::UnknownUnit {
                family: "temperature",
                token: other.to_string(),
            }),
        }
    }
}

/// Airspeed type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedType {
    /// Calibrated airspeed
    Cas,
    /// Equivalent airspeed
    Eas,
    /// True airspeed
    Tas,
    /// Mach number (dimensionless)
    Mach,
}

impl SpeedType {
    /// Canonical lowercase tag, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cas => "cas",
            Self::Eas => "eas",
            Self::Tas => "tas",
            Self::Mach => "mach",
        }
    }
}

impl fmt::Display for SpeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeedType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "cas" => Ok(Self::Cas),
            "eas" => Ok(Self::Eas),
            "tas" => Ok(Self::Tas),
            "mach" => Ok(Self::Mach),
            other => Err(Error::UnknownUnit {
                family: "speed type",
                token: other.to_string(),
            }),
        }
    }
}
