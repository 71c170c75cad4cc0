//! Errors raised by the validated temperature constructors

use super::scale::Scale;

/// Errors that can occur when constructing a temperature value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureError {
    /// Magnitude lies beyond the physical floor of its scale.
    ///
    /// For Delisle the floor is an upper bound, so this is also reported for
    /// values above 559.725°De. NaN is always rejected with this variant.
    BelowAbsoluteZero {
        /// The rejected magnitude, in units of `scale`
        value: f64,
        /// Scale the magnitude was given in
        scale: Scale,
    },
}

impl TemperatureError {
    /// True if this is the absolute-zero violation
    pub fn is_below_absolute_zero(&self) -> bool {
        matches!(self, TemperatureError::BelowAbsoluteZero { .. })
    }

    /// Scale the rejected value belonged to
    pub fn scale(&self) -> Scale {
        match self {
            TemperatureError::BelowAbsoluteZero { scale, .. } => *scale,
        }
    }
}

impl std::fmt::Display for TemperatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureError::BelowAbsoluteZero { value, scale } => write!(
                f,
                "temperature below absolute zero: {value:.2} {}",
                scale.unit_suffix()
            ),
        }
    }
}

impl std::error::Error for TemperatureError {}
