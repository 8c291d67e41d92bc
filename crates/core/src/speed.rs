//! Speed value type
//!
//! [`Speed`] binds a numeric value, a speed type tag, and a unit. The
//! knots-equivalent value is derived once at construction; conversions to
//! another speed type dispatch to the knots-only engine in
//! [`crate::airspeed`] and convert back to the speed's unit at the
//! boundary.
//!
//! Mach is dimensionless: a Mach-typed speed uses its raw value
//! regardless of the configured unit, and converting *to* Mach ignores
//! the unit entirely.

use serde::Serialize;

use crate::airspeed;
use crate::atmosphere::AtmosphericPoint;
use crate::convert::{speed_convert, speed_from_knots, speed_to_knots};
use crate::units::{SpeedType, SpeedUnit};

/// A speed value with a type (CAS, EAS, TAS, Mach) and unit.
///
/// # Example
/// ```
/// use atmospeed_core::{
///     AtmosphericPoint, LengthUnit, Speed, SpeedType, SpeedUnit, TemperatureUnit,
/// };
///
/// let point = AtmosphericPoint::from_delta_isa(
///     26_788.0,
///     0.0,
///     LengthUnit::Ft,
///     TemperatureUnit::C,
/// )
/// .unwrap();
/// let cas = Speed::new(287.3, SpeedType::Cas, SpeedUnit::Kts);
/// assert!((cas.to_mach(&point) - 0.7130).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Speed {
    value: f64,
    speed_type: SpeedType,
    unit: SpeedUnit,
    /// Knots-equivalent of `value`, fixed at construction
    knots: f64,
}

impl Speed {
    /// Create a speed. The unit is ignored for Mach, which is always
    /// dimensionless.
    pub fn new(value: f64, speed_type: SpeedType, unit: SpeedUnit) -> Self {
        Self {
            value,
            speed_type,
            unit,
            knots: speed_to_knots(value, unit),
        }
    }

    /// The value as supplied by the caller.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The speed type tag.
    pub fn speed_type(&self) -> SpeedType {
        self.speed_type
    }

    /// The speed unit. Undefined (ignored) for Mach.
    pub fn unit(&self) -> SpeedUnit {
        self.unit
    }

    /// Convert to calibrated airspeed at the given atmospheric point,
    /// in this speed's unit.
    pub fn to_cas(&self, point: &AtmosphericPoint) -> f64 {
        // Identity conversion takes no formula path
        if self.speed_type == SpeedType::Cas {
            return self.value;
        }
        let hp_ft = point.hp_ft();
        let disa_c = point.delta_isa_celsius();
        let result_kts = match self.speed_type {
            SpeedType::Eas => airspeed::keas_to_kcas(self.knots, hp_ft),
            SpeedType::Tas => airspeed::ktas_to_kcas(self.knots, hp_ft, disa_c),
            SpeedType::Mach => airspeed::mach_to_kcas(self.value, hp_ft),
            SpeedType::Cas => unreachable!(),
        };
        speed_from_knots(result_kts, self.unit)
    }

    /// Convert to equivalent airspeed at the given atmospheric point,
    /// in this speed's unit.
    pub fn to_eas(&self, point: &AtmosphericPoint) -> f64 {
        if self.speed_type == SpeedType::Eas {
            return self.value;
        }
        let hp_ft = point.hp_ft();
        let disa_c = point.delta_isa_celsius();
        let result_kts = match self.speed_type {
            SpeedType::Cas => airspeed::kcas_to_keas(self.knots, hp_ft),
            SpeedType::Tas => airspeed::ktas_to_keas(self.knots, hp_ft, disa_c),
            SpeedType::Mach => airspeed::mach_to_keas(self.value, hp_ft),
            SpeedType::Eas => unreachable!(),
        };
        speed_from_knots(result_kts, self.unit)
    }

    /// Convert to true airspeed at the given atmospheric point, in this
    /// speed's unit.
    pub fn to_tas(&self, point: &AtmosphericPoint) -> f64 {
        if self.speed_type == SpeedType::Tas {
            return self.value;
        }
        let hp_ft = point.hp_ft();
        let disa_c = point.delta_isa_celsius();
        let result_kts = match self.speed_type {
            SpeedType::Cas => airspeed::kcas_to_ktas(self.knots, hp_ft, disa_c),
            SpeedType::Eas => airspeed::keas_to_ktas(self.knots, hp_ft, disa_c),
            SpeedType::Mach => airspeed::mach_to_ktas(self.value, hp_ft, disa_c),
            SpeedType::Tas => unreachable!(),
        };
        speed_from_knots(result_kts, self.unit)
    }

    /// Convert to Mach number at the given atmospheric point. Always
    /// dimensionless; the speed's unit does not apply to the output.
    pub fn to_mach(&self, point: &AtmosphericPoint) -> f64 {
        if self.speed_type == SpeedType::Mach {
            return self.value;
        }
        let hp_ft = point.hp_ft();
        let disa_c = point.delta_isa_celsius();
        match self.speed_type {
            SpeedType::Cas => airspeed::kcas_to_mach(self.knots, hp_ft),
            SpeedType::Eas => airspeed::keas_to_mach(self.knots, hp_ft),
            SpeedType::Tas => airspeed::ktas_to_mach(self.knots, hp_ft, disa_c),
            SpeedType::Mach => unreachable!(),
        }
    }

    /// Convert this speed's raw value between two units, with no speed
    /// type change.
    pub fn convert_unit(&self, from_unit: SpeedUnit, to_unit: SpeedUnit) -> f64 {
        speed_convert(self.value, from_unit, to_unit)
    }
}
