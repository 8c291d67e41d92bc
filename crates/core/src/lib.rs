//! AtmoSpeed Core Library
//!
//! Standard atmosphere properties and airspeed conversions based on the
//! 1976 US Standard Atmosphere (NASA-TM-X-74335).
//!
//! The crate answers two questions:
//! - given a pressure altitude and a temperature deviation, what are the
//!   local temperature/pressure/density ratios and the speed of sound;
//! - given a speed expressed as one of CAS, EAS, TAS, or Mach, what is
//!   its value expressed as any other, at a given atmospheric point.
//!
//! Everything is a pure function over immutable value types: no shared
//! state, no I/O, safe to call from any number of threads. Construction
//! of [`AtmosphericPoint`] is the only fallible step; all subsequent
//! reads are total.

// Physical constants and unit vocabulary
pub mod constants;
pub mod units;

// Unit conversion (length, speed)
pub mod convert;

// Atmospheric model: temperature profile and theta/delta/sigma ratios
pub mod ratio;
pub mod temperature;

// Value types and the airspeed conversion engine
pub mod airspeed;
pub mod atmosphere;
pub mod speed;

// Pressure altitude from altimeter setting
pub mod altitude;

mod error;

// Re-export the primary API surface
pub use altitude::pressure_altitude;
pub use atmosphere::AtmosphericPoint;
pub use convert::{length_convert, speed_convert};
pub use error::{Error, Result};
pub use ratio::{delta, sigma, theta};
pub use speed::Speed;
pub use temperature::{delta_isa_from_oat, isa, oat};
pub use units::{LengthUnit, PressureUnit, SpeedType, SpeedUnit, TemperatureUnit};
