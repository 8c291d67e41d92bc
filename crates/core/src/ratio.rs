//! Atmospheric ratios: theta, delta, sigma
//!
//! Temperature, pressure, and density ratios to sea-level standard
//! values, piecewise in altitude per the 1976 US Standard Atmosphere.
//!
//! The density ratio is defined as the exact quotient `delta / theta` so
//! that the identity `sigma * theta == delta` holds bit-for-bit, not
//! merely to within rounding.

use crate::constants::{
    DELTA_AT_TROPOPAUSE, HEIGHT_TROPOPAUSE_FT, TEMP_SL_STD_K, TEMP_SL_STD_R,
    TROPOPAUSE_CONST_US, TROPOSPHERE_DELTA_EXP, ZERO_C_IN_K, ZERO_F_IN_R,
};
use crate::convert::{length_to_feet, try_map_unary};
use crate::error::Result;
use crate::temperature::{isa_kernel, validate_altitude_ft};
use crate::units::{LengthUnit, TemperatureUnit};

/// Temperature ratio at a pressure altitude already in feet, with the
/// ISA deviation already in Celsius degrees.
///
/// Unvalidated kernel for the airspeed engine, which trusts the
/// altitude invariant of an already-constructed
/// [`crate::AtmosphericPoint`].
pub(crate) fn theta_kernel(hp_ft: f64, delta_isa_c: f64) -> f64 {
    let oat_c = isa_kernel(hp_ft, TemperatureUnit::C) + delta_isa_c;
    (oat_c + ZERO_C_IN_K) / TEMP_SL_STD_K
}

/// Pressure ratio at a pressure altitude already in feet. Unvalidated.
///
/// The deviation from ISA never enters: pressure depends only on the
/// standard temperature profile.
pub(crate) fn delta_kernel(hp_ft: f64) -> f64 {
    if hp_ft <= HEIGHT_TROPOPAUSE_FT {
        theta_kernel(hp_ft, 0.0).powf(TROPOSPHERE_DELTA_EXP)
    } else {
        DELTA_AT_TROPOPAUSE * ((HEIGHT_TROPOPAUSE_FT - hp_ft) / TROPOPAUSE_CONST_US).exp()
    }
}

/// Density ratio at a pressure altitude already in feet, ISA deviation
/// in Celsius. Unvalidated.
pub(crate) fn sigma_kernel(hp_ft: f64, delta_isa_c: f64) -> f64 {
    delta_kernel(hp_ft) / theta_kernel(hp_ft, delta_isa_c)
}

/// Temperature ratio (theta = T / T_SL_std).
///
/// Computed through the absolute-temperature intermediate: the outside
/// air temperature in `temp_unit` is offset onto the Kelvin or Rankine
/// scale, then divided by 288.15 K or 518.67 °R.
///
/// # Arguments
/// * `hp` - Pressure altitude
/// * `delta_isa` - Deviation from ISA, as a difference in `temp_unit` degrees
/// * `alt_unit` - Unit of `hp`
/// * `temp_unit` - Unit family of `delta_isa`
pub fn theta(
    hp: f64,
    delta_isa: f64,
    alt_unit: LengthUnit,
    temp_unit: TemperatureUnit,
) -> Result<f64> {
    let hp_ft = length_to_feet(hp, alt_unit);
    validate_altitude_ft(hp_ft)?;

    let oat = isa_kernel(hp_ft, temp_unit) + delta_isa;
    Ok(match temp_unit {
        TemperatureUnit::C => (oat + ZERO_C_IN_K) / TEMP_SL_STD_K,
        TemperatureUnit::F => (oat + ZERO_F_IN_R) / TEMP_SL_STD_R,
        TemperatureUnit::K => oat / TEMP_SL_STD_K,
        TemperatureUnit::R => oat / TEMP_SL_STD_R,
    })
}

/// Pressure ratio (delta = P / P_SL_std).
///
/// Troposphere: `theta_ISA^5.25588`, evaluated on the standard profile
/// (zero deviation). Stratosphere: exponential decay from the tropopause
/// value; the branches are continuous there by construction of the
/// constants.
pub fn delta(hp: f64, alt_unit: LengthUnit) -> Result<f64> {
    let hp_ft = length_to_feet(hp, alt_unit);
    validate_altitude_ft(hp_ft)?;
    Ok(delta_kernel(hp_ft))
}

/// Density ratio (sigma = rho / rho_SL_std = delta / theta).
pub fn sigma(
    hp: f64,
    delta_isa: f64,
    alt_unit: LengthUnit,
    temp_unit: TemperatureUnit,
) -> Result<f64> {
    Ok(delta(hp, alt_unit)? / theta(hp, delta_isa, alt_unit, temp_unit)?)
}

/// Temperature ratio for a sequence of altitudes, elementwise.
pub fn theta_many(
    hp: &[f64],
    delta_isa: f64,
    alt_unit: LengthUnit,
    temp_unit: TemperatureUnit,
) -> Result<Vec<f64>> {
    try_map_unary(hp, |h| theta(h, delta_isa, alt_unit, temp_unit))
}

/// Pressure ratio for a sequence of altitudes, elementwise.
pub fn delta_many(hp: &[f64], alt_unit: LengthUnit) -> Result<Vec<f64>> {
    try_map_unary(hp, |h| delta(h, alt_unit))
}

/// Density ratio for a sequence of altitudes, elementwise.
pub fn sigma_many(
    hp: &[f64],
    delta_isa: f64,
    alt_unit: LengthUnit,
    temp_unit: TemperatureUnit,
) -> Result<Vec<f64>> {
    try_map_unary(hp, |h| sigma(h, delta_isa, alt_unit, temp_unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_theta_reference_value() {
        // Validated reference: theta(31000 ft, ISA) ~ 0.7869
        let th = theta(31_000.0, 0.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
        assert_relative_eq!(th, 0.7869, epsilon = 1e-4);
    }

    #[test]
    fn test_theta_is_unit_family_consistent() {
        // Same physical deviation: 10 °C == 18 °F
        let c = theta(20_000.0, 10.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
        let f = theta(20_000.0, 18.0, LengthUnit::Ft, TemperatureUnit::F).unwrap();
        let k = theta(20_000.0, 10.0, LengthUnit::Ft, TemperatureUnit::K).unwrap();
        let r = theta(20_000.0, 18.0, LengthUnit::Ft, TemperatureUnit::R).unwrap();
        assert_relative_eq!(c, f, epsilon = 1e-6);
        assert_relative_eq!(c, k, epsilon = 1e-12);
        assert_relative_eq!(f, r, epsilon = 1e-12);
    }

    #[test]
    fn test_stratosphere_reference_values() {
        let th = theta(45_000.0, 0.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
        assert_relative_eq!(th, 0.7519, epsilon = 1e-4);
        let d = delta(43_333.0, LengthUnit::Ft).unwrap();
        assert_relative_eq!(d, 0.1577, epsilon = 1e-4);
        let s = sigma(43_333.0, 0.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
        assert_relative_eq!(s, 0.2097, epsilon = 1e-4);
    }

    #[test]
    fn test_theta_with_deviation() {
        let th = theta(31_000.0, 20.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
        assert_relative_eq!(th, 0.8563, epsilon = 1e-4);
        // A 20 degree Fahrenheit deviation is a smaller physical deviation
        let th_f = theta(31_000.0, 20.0, LengthUnit::Ft, TemperatureUnit::F).unwrap();
        assert_relative_eq!(th_f, 0.8254, epsilon = 1e-4);
    }

    #[test]
    fn test_delta_reference_value() {
        // Validated reference: delta(15000 ft) ~ 0.5643
        let d = delta(15_000.0, LengthUnit::Ft).unwrap();
        assert_relative_eq!(d, 0.5643, epsilon = 1e-4);
    }

    #[test]
    fn test_sigma_reference_value() {
        // Validated reference: sigma(15000 ft, ISA) ~ 0.6292
        let s = sigma(15_000.0, 0.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
        assert_relative_eq!(s, 0.6292, epsilon = 1e-4);
    }

    #[test]
    fn test_sigma_is_exact_quotient() {
        for hp in [0.0, 12_345.6, 36_089.24, 50_000.0] {
            let th = theta(hp, 7.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
            let d = delta(hp, LengthUnit::Ft).unwrap();
            let s = sigma(hp, 7.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
            assert_eq!(s, d / th);
        }
    }

    #[test]
    fn test_delta_ignores_temperature_deviation() {
        // Only theta and sigma respond to delta ISA; delta takes no
        // deviation argument at all, so pressure follows the standard
        // profile regardless of the actual day.
        let s_hot = sigma(28_000.0, 20.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
        let s_std = sigma(28_000.0, 0.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
        assert!(s_hot < s_std, "warmer air is less dense at the same pressure");
    }

    #[test]
    fn test_delta_continuous_at_tropopause() {
        let below = delta(HEIGHT_TROPOPAUSE_FT - 1e-6, LengthUnit::Ft).unwrap();
        let above = delta(HEIGHT_TROPOPAUSE_FT + 1e-6, LengthUnit::Ft).unwrap();
        // The published tropopause constant is rounded to five digits, so
        // the branches meet to ~1e-4, not machine precision.
        assert_relative_eq!(below, above, epsilon = 1e-4);
        assert_relative_eq!(
            delta(HEIGHT_TROPOPAUSE_FT, LengthUnit::Ft).unwrap(),
            DELTA_AT_TROPOPAUSE,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_theta_continuous_at_tropopause() {
        let below = theta(HEIGHT_TROPOPAUSE_FT - 1e-6, 0.0, LengthUnit::Ft, TemperatureUnit::C)
            .unwrap();
        let above = theta(HEIGHT_TROPOPAUSE_FT + 1e-6, 0.0, LengthUnit::Ft, TemperatureUnit::C)
            .unwrap();
        assert_relative_eq!(below, above, epsilon = 1e-6);
    }

    #[test]
    fn test_ratios_reject_altitude_above_stratopause() {
        assert!(theta(66_000.0, 0.0, LengthUnit::Ft, TemperatureUnit::C).is_err());
        assert!(delta(66_000.0, LengthUnit::Ft).is_err());
        assert!(sigma(66_000.0, 0.0, LengthUnit::Ft, TemperatureUnit::C).is_err());
    }

    #[test]
    fn test_elementwise_variants() {
        let hps = [0.0, 15_000.0, 31_000.0];
        let thetas = theta_many(&hps, 0.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
        let deltas = delta_many(&hps, LengthUnit::Ft).unwrap();
        let sigmas = sigma_many(&hps, 0.0, LengthUnit::Ft, TemperatureUnit::C).unwrap();
        assert_eq!(thetas.len(), 3);
        assert_eq!(thetas[0], 1.0);
        assert_relative_eq!(deltas[1], 0.5643, epsilon = 1e-4);
        assert_relative_eq!(sigmas[1], 0.6292, epsilon = 1e-4);
    }
}
