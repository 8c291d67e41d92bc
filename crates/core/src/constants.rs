//! Physical constants of the 1976 US Standard Atmosphere
//!
//! # References
//! - U.S. Standard Atmosphere, 1976 (NASA-TM-X-74335)
//! - ICAO Doc 7488: Manual of the ICAO Standard Atmosphere

/// Tropopause height (ft). Defined as 11 000 m exactly, ~36089.24 ft.
pub const HEIGHT_TROPOPAUSE_FT: f64 = 11_000.0 / 0.3048;

/// Stratopause height (ft). Defined as 20 000 m exactly, ~65616.8 ft.
/// The model is undefined above this altitude.
pub const HEIGHT_STRATOPAUSE_FT: f64 = 20_000.0 / 0.3048;

/// Troposphere temperature lapse rate (°C/ft), also valid for K/ft
pub const LAPSE_RATE_C_PER_FT: f64 = 0.0019812;

/// Troposphere temperature lapse rate (°F/ft), also valid for °R/ft
pub const LAPSE_RATE_F_PER_FT: f64 = 0.00356616;

/// Sea level standard day temperature (°C)
pub const TEMP_SL_STD_C: f64 = 15.0;

/// Sea level standard day temperature (°F)
pub const TEMP_SL_STD_F: f64 = 59.0;

/// Sea level standard day temperature (K)
pub const TEMP_SL_STD_K: f64 = 288.15;

/// Sea level standard day temperature (°R)
pub const TEMP_SL_STD_R: f64 = 518.67;

/// Isothermal stratosphere temperature (°C)
pub const TEMP_STRATOSPHERE_C: f64 = -56.5;

/// Isothermal stratosphere temperature (°F)
pub const TEMP_STRATOSPHERE_F: f64 = -69.7;

/// 0 °C expressed in Kelvin
pub const ZERO_C_IN_K: f64 = 273.15;

/// 0 °F offset to Rankine
pub const ZERO_F_IN_R: f64 = 459.67;

/// Pressure ratio exponent in the troposphere: delta = theta_ISA^5.25588
pub const TROPOSPHERE_DELTA_EXP: f64 = 5.25588;

/// Pressure ratio at the tropopause
pub const DELTA_AT_TROPOPAUSE: f64 = 0.22336;

/// Stratosphere pressure scale height in US units (ft): R * T_trop / g0
pub const TROPOPAUSE_CONST_US: f64 = 20805.7;

/// Sea level standard pressure (inHg)
pub const PRESSURE_SL_STD_INHG: f64 = 29.92;

/// Sea level standard pressure (hPa)
pub const PRESSURE_SL_STD_HPA: f64 = 1013.25;

/// Pressure altitude formula constant (ft)
pub const PRESSURE_CALC_CONST: f64 = 145442.15;

/// Pressure altitude formula exponent: (gamma - 1) * R / (gamma * g0), US units
pub const PRESSURE_CALC_EXP: f64 = 0.190263;

/// Speed of sound at sea level standard day (kt)
pub const A0_KTS: f64 = 661.4786;

/// Speed of sound at sea level standard day (ft/s)
pub const A0_FPS: f64 = 1116.45;

/// Speed of sound at sea level standard day (m/s)
pub const A0_MPS: f64 = 340.29;

/// Speed of sound at sea level standard day (km/h)
pub const A0_KMH: f64 = 3.6 * A0_MPS;

/// Speed of sound at sea level standard day (mph)
pub const A0_MPH: f64 = 761.2;

/// Airspeed equation constant (kt): (2*gamma*P0/((gamma-1)*rho0))^0.5 / 1.6878
pub const SPEED_CALC_CONST: f64 = 1479.1;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tropopause_and_stratopause_heights() {
        assert_relative_eq!(HEIGHT_TROPOPAUSE_FT, 36089.24, epsilon = 0.01);
        assert_relative_eq!(HEIGHT_STRATOPAUSE_FT, 65616.8, epsilon = 0.1);
    }

    #[test]
    fn test_lapse_rates_are_consistent() {
        // The °F rate is exactly 1.8x the °C rate
        assert_relative_eq!(LAPSE_RATE_F_PER_FT, LAPSE_RATE_C_PER_FT * 1.8, epsilon = 1e-12);
    }

    #[test]
    fn test_sea_level_temperatures_agree_across_units() {
        assert_relative_eq!(TEMP_SL_STD_K, TEMP_SL_STD_C + ZERO_C_IN_K, epsilon = 1e-12);
        assert_relative_eq!(TEMP_SL_STD_R, TEMP_SL_STD_F + ZERO_F_IN_R, epsilon = 1e-12);
        assert_relative_eq!(TEMP_SL_STD_F, TEMP_SL_STD_C * 1.8 + 32.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stratosphere_temperature_agrees_across_units() {
        assert_relative_eq!(
            TEMP_STRATOSPHERE_F,
            TEMP_STRATOSPHERE_C * 1.8 + 32.0,
            epsilon = 1e-9
        );
    }
}
