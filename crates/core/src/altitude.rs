//! Pressure altitude from field elevation and altimeter setting

use crate::constants::{
    PRESSURE_CALC_CONST, PRESSURE_CALC_EXP, PRESSURE_SL_STD_HPA, PRESSURE_SL_STD_INHG,
};
use crate::convert::{length_convert, length_to_feet};
use crate::units::{LengthUnit, PressureUnit};

/// Pressure altitude from airport elevation and altimeter setting (QNH).
///
/// `hp_ft = elev_ft + 145442.15 * (1 - (altimeter / P_SL_std)^0.190263)`,
/// with the sea-level standard pressure chosen to match the altimeter
/// unit (29.92 inHg / 1013.25 hPa). The result is returned in the
/// elevation's unit.
pub fn pressure_altitude(
    elevation: f64,
    altimeter: f64,
    elev_unit: LengthUnit,
    altimeter_unit: PressureUnit,
) -> f64 {
    let elev_ft = length_to_feet(elevation, elev_unit);

    let p_sl = match altimeter_unit {
        PressureUnit::InHg => PRESSURE_SL_STD_INHG,
        PressureUnit::Hpa => PRESSURE_SL_STD_HPA,
    };

    let hp_ft = elev_ft + PRESSURE_CALC_CONST * (1.0 - (altimeter / p_sl).powf(PRESSURE_CALC_EXP));

    length_convert(hp_ft, LengthUnit::Ft, elev_unit)
}
