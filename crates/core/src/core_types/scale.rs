//! Scale tags and a runtime-selected temperature value
//!
//! [`Scale`] names one of the six supported scales and carries the per-scale
//! constants (unit suffix, absolute zero). [`AnyTemperature`] holds a value of
//! any scale when the scale is only known at runtime, e.g. from a CLI flag.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::TemperatureError;
use super::units::{Celsius, Delisle, Fahrenheit, Kelvin, Rankine, Reaumur, Temperature};

/// One of the six temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Reaumur,
    Delisle,
}

impl Scale {
    /// Every scale, in conversion-table order
    pub const ALL: [Scale; 6] = [
        Scale::Celsius,
        Scale::Fahrenheit,
        Scale::Kelvin,
        Scale::Rankine,
        Scale::Reaumur,
        Scale::Delisle,
    ];

    /// Constant identifier of the scale
    pub const fn name(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
            Scale::Rankine => "Rankine",
            Scale::Reaumur => "Reaumur",
            Scale::Delisle => "Delisle",
        }
    }

    /// Unit suffix appended by the canonical formatting (Kelvin has no degree sign)
    pub const fn unit_suffix(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
            Scale::Rankine => "°R",
            Scale::Reaumur => "°Re",
            Scale::Delisle => "°De",
        }
    }

    /// Absolute zero expressed in this scale's units
    pub const fn absolute_zero(self) -> f64 {
        match self {
            Scale::Celsius => Celsius::ABSOLUTE_ZERO.value(),
            Scale::Fahrenheit => Fahrenheit::ABSOLUTE_ZERO.value(),
            Scale::Kelvin => Kelvin::ABSOLUTE_ZERO.value(),
            Scale::Rankine => Rankine::ABSOLUTE_ZERO.value(),
            Scale::Reaumur => Reaumur::ABSOLUTE_ZERO.value(),
            Scale::Delisle => Delisle::ABSOLUTE_ZERO.value(),
        }
    }

    /// Whether `value` is a physically possible magnitude on this scale.
    ///
    /// Delisle runs backwards (higher numbers are colder), so its absolute
    /// zero is a ceiling rather than a floor. NaN is never physical.
    pub fn is_physical(self, value: f64) -> bool {
        match self {
            Scale::Delisle => value <= self.absolute_zero(),
            _ => value >= self.absolute_zero(),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A temperature on a scale chosen at runtime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnyTemperature {
    Celsius(Celsius),
    Fahrenheit(Fahrenheit),
    Kelvin(Kelvin),
    Rankine(Rankine),
    Reaumur(Reaumur),
    Delisle(Delisle),
}

impl AnyTemperature {
    /// Validated construction on the given scale.
    ///
    /// # Errors
    /// Returns [`TemperatureError::BelowAbsoluteZero`] if `value` is not
    /// physical on `scale`.
    pub fn new(scale: Scale, value: f64) -> Result<Self, TemperatureError> {
        Ok(match scale {
            Scale::Celsius => Celsius::new(value)?.into(),
            Scale::Fahrenheit => Fahrenheit::new(value)?.into(),
            Scale::Kelvin => Kelvin::new(value)?.into(),
            Scale::Rankine => Rankine::new(value)?.into(),
            Scale::Reaumur => Reaumur::new(value)?.into(),
            Scale::Delisle => Delisle::new(value)?.into(),
        })
    }

    /// Borrow the wrapped value through the capability trait
    pub fn as_dyn(&self) -> &dyn Temperature {
        match self {
            AnyTemperature::Celsius(t) => t,
            AnyTemperature::Fahrenheit(t) => t,
            AnyTemperature::Kelvin(t) => t,
            AnyTemperature::Rankine(t) => t,
            AnyTemperature::Reaumur(t) => t,
            AnyTemperature::Delisle(t) => t,
        }
    }

    pub fn scale(&self) -> Scale {
        self.as_dyn().scale()
    }

    pub fn magnitude(&self) -> f64 {
        self.as_dyn().magnitude()
    }

    /// Convert to `target`. Converting to the current scale returns `self` unchanged.
    #[must_use]
    pub fn convert_to(self, target: Scale) -> AnyTemperature {
        if target == self.scale() {
            return self;
        }
        let t = self.as_dyn();
        match target {
            Scale::Celsius => t.to_celsius().into(),
            Scale::Fahrenheit => t.to_fahrenheit().into(),
            Scale::Kelvin => t.to_kelvin().into(),
            Scale::Rankine => t.to_rankine().into(),
            Scale::Reaumur => t.to_reaumur().into(),
            Scale::Delisle => t.to_delisle().into(),
        }
    }
}

impl fmt::Display for AnyTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_dyn(), f)
    }
}

impl From<Celsius> for AnyTemperature {
    fn from(t: Celsius) -> Self {
        AnyTemperature::Celsius(t)
    }
}

impl From<Fahrenheit> for AnyTemperature {
    fn from(t: Fahrenheit) -> Self {
        AnyTemperature::Fahrenheit(t)
    }
}

impl From<Kelvin> for AnyTemperature {
    fn from(t: Kelvin) -> Self {
        AnyTemperature::Kelvin(t)
    }
}

impl From<Rankine> for AnyTemperature {
    fn from(t: Rankine) -> Self {
        AnyTemperature::Rankine(t)
    }
}

impl From<Reaumur> for AnyTemperature {
    fn from(t: Reaumur) -> Self {
        AnyTemperature::Reaumur(t)
    }
}

impl From<Delisle> for AnyTemperature {
    fn from(t: Delisle) -> Self {
        AnyTemperature::Delisle(t)
    }
}
