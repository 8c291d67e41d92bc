//! ISA temperature, outside air temperature, and ISA deviation
//!
//! Implements the piecewise 1976 US Standard Atmosphere temperature
//! profile: a linear lapse through the troposphere, an isothermal
//! stratosphere up to the stratopause, and a hard error above it.
//!
//! Delta-ISA values are temperature *differences*: they are added to the
//! ISA temperature in the requested unit's degree size and never
//! re-offset through an absolute scale.

use crate::constants::{
    HEIGHT_STRATOPAUSE_FT, HEIGHT_TROPOPAUSE_FT, LAPSE_RATE_C_PER_FT, LAPSE_RATE_F_PER_FT,
    TEMP_SL_STD_C, TEMP_SL_STD_F, TEMP_SL_STD_K, TEMP_SL_STD_R, TEMP_STRATOSPHERE_C,
    TEMP_STRATOSPHERE_F, ZERO_C_IN_K, ZERO_F_IN_R,
};
use crate::convert::{length_to_feet, try_map_unary};
use crate::error::{Error, Result};
use crate::units::{LengthUnit, TemperatureUnit};

/// Reject altitudes above the stratopause, where the model is undefined.
pub(crate) fn validate_altitude_ft(hp_ft: f64) -> Result<()> {
    if hp_ft > HEIGHT_STRATOPAUSE_FT {
        return Err(Error::AltitudeAboveStratopause { altitude_ft: hp_ft });
    }
    Ok(())
}

/// ISA temperature at a pressure altitude already expressed in feet.
///
/// Unvalidated kernel shared by the public entry points and the ratio
/// model; callers are responsible for the stratopause check.
pub(crate) fn isa_kernel(hp_ft: f64, temp_unit: TemperatureUnit) -> f64 {
    let in_troposphere = hp_ft <= HEIGHT_TROPOPAUSE_FT;
    match temp_unit {
        TemperatureUnit::C => {
            if in_troposphere {
                TEMP_SL_STD_C - LAPSE_RATE_C_PER_FT * hp_ft
            } else {
                TEMP_STRATOSPHERE_C
            }
        }
        TemperatureUnit::F => {
            if in_troposphere {
                TEMP_SL_STD_F - LAPSE_RATE_F_PER_FT * hp_ft
            } else {
                TEMP_STRATOSPHERE_F
            }
        }
        TemperatureUnit::K => {
            if in_troposphere {
                TEMP_SL_STD_K - LAPSE_RATE_C_PER_FT * hp_ft
            } else {
                TEMP_STRATOSPHERE_C + ZERO_C_IN_K
            }
        }
        TemperatureUnit::R => {
            if in_troposphere {
                TEMP_SL_STD_R - LAPSE_RATE_F_PER_FT * hp_ft
            } else {
                TEMP_STRATOSPHERE_F + ZERO_F_IN_R
            }
        }
    }
}

/// ISA (International Standard Atmosphere) temperature at a pressure
/// altitude.
///
/// # Arguments
/// * `hp` - Pressure altitude
/// * `alt_unit` - Unit of `hp`
/// * `temp_unit` - Output temperature unit
///
/// # Errors
/// [`Error::AltitudeAboveStratopause`] if `hp` is above 20 km / 65 617 ft.
pub fn isa(hp: f64, alt_unit: LengthUnit, temp_unit: TemperatureUnit) -> Result<f64> {
    let hp_ft = length_to_feet(hp, alt_unit);
    validate_altitude_ft(hp_ft)?;
    Ok(isa_kernel(hp_ft, temp_unit))
}

/// ISA temperature for a sequence of pressure altitudes, elementwise.
pub fn isa_many(
    hp: &[f64],
    alt_unit: LengthUnit,
    temp_unit: TemperatureUnit,
) -> Result<Vec<f64>> {
    try_map_unary(hp, |h| isa(h, alt_unit, temp_unit))
}

/// Outside air temperature from pressure altitude and ISA deviation.
///
/// `delta_isa` is a temperature difference in `temp_unit`'s delta
/// convention and is applied additively.
pub fn oat(
    hp: f64,
    delta_isa: f64,
    alt_unit: LengthUnit,
    temp_unit: TemperatureUnit,
) -> Result<f64> {
    Ok(isa(hp, alt_unit, temp_unit)? + delta_isa)
}

/// ISA deviation for a given pressure altitude and outside air
/// temperature.
pub fn delta_isa_from_oat(
    hp: f64,
    oat_value: f64,
    alt_unit: LengthUnit,
    temp_unit: TemperatureUnit,
) -> Result<f64> {
    Ok(oat_value - isa(hp, alt_unit, temp_unit)?)
}
