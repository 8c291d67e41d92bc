//! Atmospheric point: a pressure altitude plus a temperature condition
//!
//! [`AtmosphericPoint`] is an immutable value. Construction converts the
//! altitude to feet, enforces the stratopause invariant, and resolves the
//! caller's temperature input (delta-ISA or absolute OAT) to a single
//! stored delta-ISA value. Every derived quantity is a pure function of
//! those fields, evaluated once at construction, so the accessors are
//! infallible: a point that exists is always valid.

use serde::Serialize;

use crate::constants::{A0_FPS, A0_KMH, A0_KTS, A0_MPH, A0_MPS};
use crate::convert::length_to_feet;
use crate::error::Result;
use crate::ratio;
use crate::temperature::{self, validate_altitude_ft};
use crate::units::{LengthUnit, SpeedUnit, TemperatureUnit};

/// An atmospheric point defined by pressure altitude and temperature
/// condition.
///
/// # Example
/// ```
/// use atmospeed_core::{AtmosphericPoint, LengthUnit, TemperatureUnit};
///
/// let point = AtmosphericPoint::from_delta_isa(
///     31_000.0,
///     0.0,
///     LengthUnit::Ft,
///     TemperatureUnit::C,
/// )
/// .unwrap();
/// assert!((point.theta() - 0.7869).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtmosphericPoint {
    hp: f64,
    hp_ft: f64,
    alt_unit: LengthUnit,
    temp_unit: TemperatureUnit,
    /// ISA deviation in the point's temperature unit (delta convention)
    delta_isa: f64,
    theta: f64,
    delta: f64,
    sigma: f64,
    isa_temp: f64,
    oat: f64,
}

impl AtmosphericPoint {
    /// Create a point from altitude and temperature, where `temperature`
    /// is a delta-ISA value if `temp_is_delta_isa` is true, otherwise an
    /// absolute outside air temperature.
    ///
    /// # Errors
    /// [`crate::Error::AltitudeAboveStratopause`] if the altitude,
    /// converted to feet, exceeds 65 616.8 ft.
    pub fn new(
        hp: f64,
        temperature: f64,
        temp_is_delta_isa: bool,
        alt_unit: LengthUnit,
        temp_unit: TemperatureUnit,
    ) -> Result<Self> {
        let hp_ft = length_to_feet(hp, alt_unit);
        validate_altitude_ft(hp_ft)?;

        let delta_isa = if temp_is_delta_isa {
            temperature
        } else {
            temperature::delta_isa_from_oat(hp, temperature, alt_unit, temp_unit)?
        };

        let theta = ratio::theta(hp, delta_isa, alt_unit, temp_unit)?;
        let delta = ratio::delta(hp, alt_unit)?;
        let isa_temp = temperature::isa(hp, alt_unit, temp_unit)?;

        Ok(Self {
            hp,
            hp_ft,
            alt_unit,
            temp_unit,
            delta_isa,
            theta,
            delta,
            // Defined as the exact quotient so sigma * theta == delta
            sigma: delta / theta,
            isa_temp,
            oat: isa_temp + delta_isa,
        })
    }

    /// Create a point from a delta-ISA temperature deviation.
    pub fn from_delta_isa(
        hp: f64,
        delta_isa: f64,
        alt_unit: LengthUnit,
        temp_unit: TemperatureUnit,
    ) -> Result<Self> {
        Self::new(hp, delta_isa, true, alt_unit, temp_unit)
    }

    /// Create a point from an absolute outside air temperature.
    pub fn from_oat(
        hp: f64,
        oat: f64,
        alt_unit: LengthUnit,
        temp_unit: TemperatureUnit,
    ) -> Result<Self> {
        Self::new(hp, oat, false, alt_unit, temp_unit)
    }

    /// Pressure altitude in feet.
    pub fn hp_ft(&self) -> f64 {
        self.hp_ft
    }

    /// Pressure altitude as supplied by the caller.
    pub fn hp(&self) -> f64 {
        self.hp
    }

    /// Unit the caller expressed the altitude in.
    pub fn alt_unit(&self) -> LengthUnit {
        self.alt_unit
    }

    /// Unit the caller expressed the temperature in.
    pub fn temp_unit(&self) -> TemperatureUnit {
        self.temp_unit
    }

    /// Temperature ratio theta = T / T_SL_std.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Pressure ratio delta = P / P_SL_std.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Density ratio sigma = rho / rho_SL_std.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Outside air temperature in the point's temperature unit.
    pub fn oat(&self) -> f64 {
        self.oat
    }

    /// ISA standard temperature in the point's temperature unit.
    pub fn isa_temperature(&self) -> f64 {
        self.isa_temp
    }

    /// ISA deviation in the point's temperature unit.
    pub fn delta_isa(&self) -> f64 {
        self.delta_isa
    }

    /// Local speed of sound: a0 * sqrt(theta), with a0 a fixed reference
    /// constant per unit.
    pub fn speed_of_sound(&self, speed_unit: SpeedUnit) -> f64 {
        let a0 = match speed_unit {
            SpeedUnit::Kts => A0_KTS,
            SpeedUnit::Fps => A0_FPS,
            SpeedUnit::Mph => A0_MPH,
            SpeedUnit::Mps => A0_MPS,
            SpeedUnit::Kmh => A0_KMH,
        };
        a0 * self.theta.sqrt()
    }

    /// ISA deviation in Celsius degrees, as required by the airspeed
    /// equations. A delta is a temperature difference: the Fahrenheit
    /// family scales by 1/1.8 with no additive offset.
    pub(crate) fn delta_isa_celsius(&self) -> f64 {
        if self.temp_unit.is_fahrenheit_family() {
            self.delta_isa / 1.8
        } else {
            self.delta_isa
        }
    }
}
