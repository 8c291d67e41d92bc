//! Error types for the atmosphere and airspeed calculations.

use thiserror::Error;

/// Convenient result alias for the atmospeed library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Altitude is above the stratopause (20 km / 65 617 ft), where the
    /// model is undefined. Raised at [`crate::AtmosphericPoint`]
    /// construction and by direct temperature/ratio calls.
    #[error("altitude {altitude_ft:.1} ft is above the stratopause (20 km / 65617 ft)")]
    AltitudeAboveStratopause { altitude_ft: f64 },

    /// A unit tag string did not match any member of its unit family.
    /// Raised while parsing, before any computation.
    #[error("unrecognized {family} unit {token:?}")]
    UnknownUnit {
        family: &'static str,
        token: String,
    },
}
