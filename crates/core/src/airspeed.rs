//! Airspeed conversion engine: CAS, EAS, TAS, and Mach
//!
//! The twelve directed conversions among the four airspeed types, all
//! derived from the isentropic compressible-flow relation (gamma = 1.4)
//! between impact pressure and Mach number, plus the local theta/delta
//! ratios.
//!
//! Engine internals are knots-only: inputs are KCAS/KEAS/KTAS, pressure
//! altitude in feet, and ISA deviation in Celsius degrees. Unit handling
//! belongs to [`crate::Speed`], which converts at the boundary.
//!
//! These functions perform no validation. Altitude is trusted to satisfy
//! the stratopause invariant of an already-constructed
//! [`crate::AtmosphericPoint`]. Value ranges are not checked either:
//! physically invalid inputs (negative speeds, Mach far beyond the
//! subsonic model) can raise a negative base to a fractional power and
//! propagate NaN, which is the documented behavior for out-of-range
//! input.
//!
//! # References
//! - U.S. Standard Atmosphere, 1976 (NASA-TM-X-74335)
//! - Anderson, J.D. (2003). "Modern Compressible Flow", 3rd ed.

use crate::constants::{A0_KTS, SPEED_CALC_CONST};
use crate::ratio::{delta_kernel, sigma_kernel, theta_kernel};

/// Isentropic exponent gamma / (gamma - 1) for air (gamma = 1.4)
const PRESSURE_EXP: f64 = 3.5;

/// Shared first stage of the KCAS conversions.
///
/// Recovers the impact-pressure term at altitude from the sea-level
/// calibration: `((1/delta) * [(1 + 0.2*(KCAS/a0)^2)^3.5 - 1] + 1)^(1/3.5) - 1`.
fn kcas_term(kcas: f64, hp_ft: f64) -> f64 {
    let d = delta_kernel(hp_ft);
    let term1 = 1.0 + 0.2 * (kcas / A0_KTS).powi(2);
    let term2 = term1.powf(PRESSURE_EXP) - 1.0;
    let term3 = (1.0 / d) * term2 + 1.0;
    term3.powf(1.0 / PRESSURE_EXP) - 1.0
}

/// Calibrated to equivalent airspeed (knots).
pub fn kcas_to_keas(kcas: f64, hp_ft: f64) -> f64 {
    let d = delta_kernel(hp_ft);
    SPEED_CALC_CONST * (d * kcas_term(kcas, hp_ft)).sqrt()
}

/// Calibrated airspeed (knots) to Mach number.
pub fn kcas_to_mach(kcas: f64, hp_ft: f64) -> f64 {
    (5.0 * kcas_term(kcas, hp_ft)).sqrt()
}

/// Calibrated to true airspeed (knots).
pub fn kcas_to_ktas(kcas: f64, hp_ft: f64, disa_c: f64) -> f64 {
    let th = theta_kernel(hp_ft, disa_c);
    SPEED_CALC_CONST * (th * kcas_term(kcas, hp_ft)).sqrt()
}

/// Equivalent to calibrated airspeed (knots).
pub fn keas_to_kcas(keas: f64, hp_ft: f64) -> f64 {
    let d = delta_kernel(hp_ft);
    let term1 = 1.0 + (1.0 / d) * (keas / SPEED_CALC_CONST).powi(2);
    let term2 = term1.powf(PRESSURE_EXP) - 1.0;
    let term3 = d * term2 + 1.0;
    SPEED_CALC_CONST * (term3.powf(1.0 / PRESSURE_EXP) - 1.0).sqrt()
}

/// Equivalent airspeed (knots) to Mach number.
pub fn keas_to_mach(keas: f64, hp_ft: f64) -> f64 {
    let d = delta_kernel(hp_ft);
    keas / A0_KTS * (1.0 / d).sqrt()
}

/// Equivalent to true airspeed (knots).
pub fn keas_to_ktas(keas: f64, hp_ft: f64, disa_c: f64) -> f64 {
    let s = sigma_kernel(hp_ft, disa_c);
    keas / s.sqrt()
}

/// True to calibrated airspeed (knots).
pub fn ktas_to_kcas(ktas: f64, hp_ft: f64, disa_c: f64) -> f64 {
    let th = theta_kernel(hp_ft, disa_c);
    let term1 = 1.0 + (1.0 / th) * (ktas / SPEED_CALC_CONST).powi(2);
    let term2 = term1.powf(PRESSURE_EXP) - 1.0;
    let d = delta_kernel(hp_ft);
    let term3 = d * term2 + 1.0;
    SPEED_CALC_CONST * (term3.powf(1.0 / PRESSURE_EXP) - 1.0).sqrt()
}

/// True to equivalent airspeed (knots).
pub fn ktas_to_keas(ktas: f64, hp_ft: f64, disa_c: f64) -> f64 {
    let s = sigma_kernel(hp_ft, disa_c);
    ktas * s.sqrt()
}

/// True airspeed (knots) to Mach number.
pub fn ktas_to_mach(ktas: f64, hp_ft: f64, disa_c: f64) -> f64 {
    let th = theta_kernel(hp_ft, disa_c);
    ktas / (A0_KTS * th.sqrt())
}

/// Mach number to calibrated airspeed (knots).
pub fn mach_to_kcas(mach: f64, hp_ft: f64) -> f64 {
    let term1 = (0.2 * mach * mach + 1.0).powf(PRESSURE_EXP) - 1.0;
    let d = delta_kernel(hp_ft);
    let term2 = d * term1 + 1.0;
    let term3 = term2.powf(1.0 / PRESSURE_EXP) - 1.0;
    SPEED_CALC_CONST * term3.sqrt()
}

/// Mach number to equivalent airspeed (knots).
pub fn mach_to_keas(mach: f64, hp_ft: f64) -> f64 {
    let d = delta_kernel(hp_ft);
    A0_KTS * mach * d.sqrt()
}

/// Mach number to true airspeed (knots).
pub fn mach_to_ktas(mach: f64, hp_ft: f64, disa_c: f64) -> f64 {
    let th = theta_kernel(hp_ft, disa_c);
    A0_KTS * mach * th.sqrt()
}
