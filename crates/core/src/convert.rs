//! Unit conversion for length and speed
//!
//! Pure affine scalar maps plus a thin elementwise layer for sequence
//! inputs. All formulas elsewhere in the crate operate internally in
//! feet and knots; these functions are the only place the conversion
//! constants live.

use crate::units::{LengthUnit, SpeedUnit};

/// Meters per foot (exact by definition)
const METERS_PER_FOOT: f64 = 0.3048;

/// Feet per statute mile (exact by definition)
const FEET_PER_STATUTE_MILE: f64 = 5280.0;

/// Feet per nautical mile
const FEET_PER_NAUTICAL_MILE: f64 = 6076.11549;

/// Knots to feet per second
const KTS_TO_FPS: f64 = 1.6878;

/// Knots to meters per second
const KTS_TO_MPS: f64 = 0.51444;

/// Knots to kilometers per hour
const KTS_TO_KMH: f64 = 1.8520;

/// Knots to statute miles per hour
const KTS_TO_MPH: f64 = 1.1508;

/// Convert a length value to feet.
pub fn length_to_feet(value: f64, from_unit: LengthUnit) -> f64 {
    match from_unit {
        LengthUnit::Ft => value,
        LengthUnit::M => value / METERS_PER_FOOT,
        LengthUnit::Km => value * 1000.0 / METERS_PER_FOOT,
        LengthUnit::Sm => value * FEET_PER_STATUTE_MILE,
        LengthUnit::Nm => value * FEET_PER_NAUTICAL_MILE,
    }
}

/// Convert a length value between any two units, pivoting through feet.
pub fn length_convert(value: f64, from_unit: LengthUnit, to_unit: LengthUnit) -> f64 {
    let feet = length_to_feet(value, from_unit);
    match to_unit {
        LengthUnit::Ft => feet,
        LengthUnit::M => feet * METERS_PER_FOOT,
        LengthUnit::Km => feet * METERS_PER_FOOT / 1000.0,
        LengthUnit::Sm => feet / FEET_PER_STATUTE_MILE,
        LengthUnit::Nm => feet / FEET_PER_NAUTICAL_MILE,
    }
}

/// Convert a speed value to knots.
pub fn speed_to_knots(value: f64, from_unit: SpeedUnit) -> f64 {
    match from_unit {
        SpeedUnit::Kts => value,
        SpeedUnit::Fps => value / KTS_TO_FPS,
        SpeedUnit::Mph => value / KTS_TO_MPH,
        SpeedUnit::Mps => value / KTS_TO_MPS,
        SpeedUnit::Kmh => value / KTS_TO_KMH,
    }
}

/// Convert a speed value from knots to another unit.
pub fn speed_from_knots(value_kts: f64, to_unit: SpeedUnit) -> f64 {
    match to_unit {
        SpeedUnit::Kts => value_kts,
        SpeedUnit::Fps => value_kts * KTS_TO_FPS,
        SpeedUnit::Mph => value_kts * KTS_TO_MPH,
        SpeedUnit::Mps => value_kts * KTS_TO_MPS,
        SpeedUnit::Kmh => value_kts * KTS_TO_KMH,
    }
}

/// Convert a speed value between any two units, pivoting through knots.
pub fn speed_convert(value: f64, from_unit: SpeedUnit, to_unit: SpeedUnit) -> f64 {
    speed_from_knots(speed_to_knots(value, from_unit), to_unit)
}

/// Apply an infallible scalar function over a slice, preserving order.
///
/// The elementwise layer for batch inputs: every scalar formula in this
/// crate is written once and lifted over sequences with this helper (or
/// [`try_map_unary`] when the scalar function is fallible).
pub fn map_unary(values: &[f64], f: impl Fn(f64) -> f64) -> Vec<f64> {
    values.iter().copied().map(f).collect()
}

/// Apply a fallible scalar function over a slice, stopping at the first
/// error. Elements are independent, so the error identifies the first
/// offending input and nothing is partially returned.
pub fn try_map_unary<E>(
    values: &[f64],
    f: impl Fn(f64) -> Result<f64, E>,
) -> Result<Vec<f64>, E> {
    values.iter().copied().map(f).collect()
}
