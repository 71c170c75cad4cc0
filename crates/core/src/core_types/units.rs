//! Semantic unit types for the six temperature scales
//!
//! This module provides newtype wrappers so that a Celsius magnitude can never
//! be mixed up with a Kelvin or Delisle one by accident.
//!
//! # Design Philosophy
//! - Every scale type wraps a single `f64` and is `Copy`
//! - Private inner fields with validated constructors (absolute-zero floor)
//! - Conversions are total and never re-validate: an affine map of a physical
//!   temperature is still physical
//! - Celsius is the hub; pairs without a direct formula go through Celsius
//! - Equality and total ordering both via `f64::total_cmp`, so -0.0 and 0.0
//!   are distinct values
//! - Serde support; deserialization goes through the validated constructor
//!
//! # Usage
//! ```
//! use tempconv_core::core_types::{Celsius, Temperature};
//!
//! let temp = Celsius::new(100.0).unwrap();
//! assert_eq!(temp.to_fahrenheit().format(), "212.00°F");
//! assert_eq!(temp.to_kelvin().to_string(), "373.15K");
//!
//! let any: &dyn Temperature = &temp;
//! assert_eq!(any.scale_name(), "Celsius");
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use tracing::debug;

use super::error::TemperatureError;
use super::scale::Scale;

// ============================================================================
// CONVERSION CONSTANTS
// ============================================================================

const C_TO_F_MULTIPLIER: f64 = 9.0 / 5.0;
const C_TO_F_OFFSET: f64 = 32.0;
/// 0°C = 273.15 K
const C_TO_K_OFFSET: f64 = 273.15;
const C_TO_RE_MULTIPLIER: f64 = 4.0 / 5.0;
/// Delisle measures downwards from the boiling point of water
const C_TO_DE_OFFSET: f64 = 100.0;
const C_TO_DE_MULTIPLIER: f64 = 3.0 / 2.0;

const F_TO_C_MULTIPLIER: f64 = 5.0 / 9.0;
/// 0°F = 459.67°R
const F_TO_R_OFFSET: f64 = 459.67;

const RE_TO_C_MULTIPLIER: f64 = 5.0 / 4.0;
const DE_TO_C_MULTIPLIER: f64 = 2.0 / 3.0;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Shared absolute-zero check behind every validated constructor
fn validate(value: f64, scale: Scale) -> Result<f64, TemperatureError> {
    if scale.is_physical(value) {
        Ok(value)
    } else {
        debug!(
            scale = scale.name(),
            value,
            limit = scale.absolute_zero(),
            "rejected temperature beyond absolute zero"
        );
        Err(TemperatureError::BelowAbsoluteZero { value, scale })
    }
}

// ============================================================================
// CAPABILITY CONTRACT
// ============================================================================

/// Behaviour shared by every temperature scale.
///
/// Implementors must provide [`Temperature::to_celsius`]; every other
/// conversion defaults to the two-hop route through Celsius. Scales with a
/// direct formula override the matching method, and every scale overrides the
/// conversion to itself so that it returns the magnitude untouched.
///
/// The trait is object safe, so `&dyn Temperature` can stand in for a value
/// whose scale is not known statically.
pub trait Temperature: fmt::Display {
    /// Scale this value is expressed in
    fn scale(&self) -> Scale;

    /// Raw magnitude in this scale's units
    fn magnitude(&self) -> f64;

    fn to_celsius(&self) -> Celsius;

    fn to_fahrenheit(&self) -> Fahrenheit {
        self.to_celsius().to_fahrenheit()
    }

    fn to_kelvin(&self) -> Kelvin {
        self.to_celsius().to_kelvin()
    }

    fn to_rankine(&self) -> Rankine {
        self.to_celsius().to_rankine()
    }

    fn to_reaumur(&self) -> Reaumur {
        self.to_celsius().to_reaumur()
    }

    fn to_delisle(&self) -> Delisle {
        self.to_celsius().to_delisle()
    }

    /// Canonical rendering: two decimals followed by the unit suffix
    fn format(&self) -> String {
        self.to_string()
    }

    fn scale_name(&self) -> &'static str {
        self.scale().name()
    }
}

// ============================================================================
// CELSIUS
// ============================================================================

/// Temperature in degrees Celsius
/// Hub scale: indirect conversions between the other scales pass through here
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Celsius(f64);

impl PartialEq for Celsius {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Absolute zero in Celsius
    pub const ABSOLUTE_ZERO: Celsius = Celsius(-273.15);

    /// Water freezing point
    pub const FREEZING: Celsius = Celsius(0.0);

    /// Water boiling point at 1 atm
    pub const BOILING: Celsius = Celsius(100.0);

    /// Create a new Celsius temperature.
    ///
    /// # Errors
    /// Returns [`TemperatureError::BelowAbsoluteZero`] if `value < -273.15`.
    pub fn new(value: f64) -> Result<Self, TemperatureError> {
        validate(value, Scale::Celsius).map(Celsius)
    }

    /// Get the raw f64 value
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Temperature for Celsius {
    fn scale(&self) -> Scale {
        Scale::Celsius
    }

    fn magnitude(&self) -> f64 {
        self.0
    }

    fn to_celsius(&self) -> Celsius {
        *self
    }

    fn to_fahrenheit(&self) -> Fahrenheit {
        Fahrenheit(self.0 * C_TO_F_MULTIPLIER + C_TO_F_OFFSET)
    }

    fn to_kelvin(&self) -> Kelvin {
        Kelvin(self.0 + C_TO_K_OFFSET)
    }

    fn to_rankine(&self) -> Rankine {
        Rankine((self.0 + C_TO_K_OFFSET) * C_TO_F_MULTIPLIER)
    }

    fn to_reaumur(&self) -> Reaumur {
        Reaumur(self.0 * C_TO_RE_MULTIPLIER)
    }

    fn to_delisle(&self) -> Delisle {
        Delisle((C_TO_DE_OFFSET - self.0) * C_TO_DE_MULTIPLIER)
    }
}

impl TryFrom<f64> for Celsius {
    type Error = TemperatureError;
    fn try_from(value: f64) -> Result<Self, TemperatureError> {
        Celsius::new(value)
    }
}

impl From<Celsius> for f64 {
    fn from(c: Celsius) -> f64 {
        c.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°C", self.0)
    }
}

// ============================================================================
// FAHRENHEIT
// ============================================================================

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Fahrenheit(f64);

impl PartialEq for Fahrenheit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fahrenheit {}

impl PartialOrd for Fahrenheit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fahrenheit {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Fahrenheit {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Fahrenheit {
    /// Absolute zero in Fahrenheit
    pub const ABSOLUTE_ZERO: Fahrenheit = Fahrenheit(-459.67);

    /// Create a new Fahrenheit temperature.
    ///
    /// # Errors
    /// Returns [`TemperatureError::BelowAbsoluteZero`] if `value < -459.67`.
    pub fn new(value: f64) -> Result<Self, TemperatureError> {
        validate(value, Scale::Fahrenheit).map(Fahrenheit)
    }

    /// Get the raw f64 value
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Temperature for Fahrenheit {
    fn scale(&self) -> Scale {
        Scale::Fahrenheit
    }

    fn magnitude(&self) -> f64 {
        self.0
    }

    fn to_celsius(&self) -> Celsius {
        Celsius((self.0 - C_TO_F_OFFSET) * F_TO_C_MULTIPLIER)
    }

    fn to_fahrenheit(&self) -> Fahrenheit {
        *self
    }

    fn to_kelvin(&self) -> Kelvin {
        Kelvin((self.0 - C_TO_F_OFFSET) * F_TO_C_MULTIPLIER + C_TO_K_OFFSET)
    }

    fn to_rankine(&self) -> Rankine {
        Rankine(self.0 + F_TO_R_OFFSET)
    }
}

impl TryFrom<f64> for Fahrenheit {
    type Error = TemperatureError;
    fn try_from(value: f64) -> Result<Self, TemperatureError> {
        Fahrenheit::new(value)
    }
}

impl From<Fahrenheit> for f64 {
    fn from(f: Fahrenheit) -> f64 {
        f.0
    }
}

impl fmt::Display for Fahrenheit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°F", self.0)
    }
}

// ============================================================================
// KELVIN
// ============================================================================

/// Temperature in Kelvin (absolute scale)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Kelvin(f64);

impl PartialEq for Kelvin {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Kelvin {}

impl PartialOrd for Kelvin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kelvin {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kelvin {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kelvin {
    /// Absolute zero
    pub const ABSOLUTE_ZERO: Kelvin = Kelvin(0.0);

    /// Create a new Kelvin temperature.
    ///
    /// # Errors
    /// Returns [`TemperatureError::BelowAbsoluteZero`] for negative values.
    pub fn new(value: f64) -> Result<Self, TemperatureError> {
        validate(value, Scale::Kelvin).map(Kelvin)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Temperature for Kelvin {
    fn scale(&self) -> Scale {
        Scale::Kelvin
    }

    fn magnitude(&self) -> f64 {
        self.0
    }

    fn to_celsius(&self) -> Celsius {
        Celsius(self.0 - C_TO_K_OFFSET)
    }

    fn to_kelvin(&self) -> Kelvin {
        *self
    }

    fn to_rankine(&self) -> Rankine {
        Rankine(self.0 * C_TO_F_MULTIPLIER)
    }
}

impl TryFrom<f64> for Kelvin {
    type Error = TemperatureError;
    fn try_from(value: f64) -> Result<Self, TemperatureError> {
        Kelvin::new(value)
    }
}

impl From<Kelvin> for f64 {
    fn from(k: Kelvin) -> f64 {
        k.0
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}K", self.0)
    }
}

// ============================================================================
// RANKINE
// ============================================================================

/// Temperature in degrees Rankine
/// Absolute scale with Fahrenheit-sized degrees
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Rankine(f64);

impl PartialEq for Rankine {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rankine {}

impl PartialOrd for Rankine {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rankine {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Rankine {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Rankine {
    /// Absolute zero
    pub const ABSOLUTE_ZERO: Rankine = Rankine(0.0);

    /// Create a new Rankine temperature.
    ///
    /// # Errors
    /// Returns [`TemperatureError::BelowAbsoluteZero`] for negative values.
    pub fn new(value: f64) -> Result<Self, TemperatureError> {
        validate(value, Scale::Rankine).map(Rankine)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Temperature for Rankine {
    fn scale(&self) -> Scale {
        Scale::Rankine
    }

    fn magnitude(&self) -> f64 {
        self.0
    }

    // °R -> °F -> °C, so 0°R lands on -273.15°C
    fn to_celsius(&self) -> Celsius {
        Celsius((self.0 - F_TO_R_OFFSET - C_TO_F_OFFSET) * F_TO_C_MULTIPLIER)
    }

    fn to_fahrenheit(&self) -> Fahrenheit {
        Fahrenheit(self.0 - F_TO_R_OFFSET)
    }

    fn to_kelvin(&self) -> Kelvin {
        Kelvin(self.0 * F_TO_C_MULTIPLIER)
    }

    fn to_rankine(&self) -> Rankine {
        *self
    }
}

impl TryFrom<f64> for Rankine {
    type Error = TemperatureError;
    fn try_from(value: f64) -> Result<Self, TemperatureError> {
        Rankine::new(value)
    }
}

impl From<Rankine> for f64 {
    fn from(r: Rankine) -> f64 {
        r.0
    }
}

impl fmt::Display for Rankine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°R", self.0)
    }
}

// ============================================================================
// RÉAUMUR
// ============================================================================

/// Temperature in degrees Réaumur
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Reaumur(f64);

impl PartialEq for Reaumur {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Reaumur {}

impl PartialOrd for Reaumur {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reaumur {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Reaumur {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Reaumur {
    /// Absolute zero in Réaumur
    pub const ABSOLUTE_ZERO: Reaumur = Reaumur(-218.52);

    /// Create a new Réaumur temperature.
    ///
    /// # Errors
    /// Returns [`TemperatureError::BelowAbsoluteZero`] if `value < -218.52`.
    pub fn new(value: f64) -> Result<Self, TemperatureError> {
        validate(value, Scale::Reaumur).map(Reaumur)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Temperature for Reaumur {
    fn scale(&self) -> Scale {
        Scale::Reaumur
    }

    fn magnitude(&self) -> f64 {
        self.0
    }

    fn to_celsius(&self) -> Celsius {
        Celsius(self.0 * RE_TO_C_MULTIPLIER)
    }

    fn to_reaumur(&self) -> Reaumur {
        *self
    }
}

impl TryFrom<f64> for Reaumur {
    type Error = TemperatureError;
    fn try_from(value: f64) -> Result<Self, TemperatureError> {
        Reaumur::new(value)
    }
}

impl From<Reaumur> for f64 {
    fn from(re: Reaumur) -> f64 {
        re.0
    }
}

impl fmt::Display for Reaumur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°Re", self.0)
    }
}

// ============================================================================
// DELISLE
// ============================================================================

/// Temperature in degrees Delisle
///
/// The scale is inverted: 0°De is boiling water and the number grows as the
/// temperature drops, so absolute zero (559.725°De) is the largest valid value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Delisle(f64);

impl PartialEq for Delisle {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Delisle {}

impl PartialOrd for Delisle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Delisle {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Delisle {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Delisle {
    /// Absolute zero in Delisle (upper bound)
    pub const ABSOLUTE_ZERO: Delisle = Delisle(559.725);

    /// Create a new Delisle temperature.
    ///
    /// # Errors
    /// Returns [`TemperatureError::BelowAbsoluteZero`] if `value > 559.725`,
    /// i.e. colder than absolute zero.
    pub fn new(value: f64) -> Result<Self, TemperatureError> {
        validate(value, Scale::Delisle).map(Delisle)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Temperature for Delisle {
    fn scale(&self) -> Scale {
        Scale::Delisle
    }

    fn magnitude(&self) -> f64 {
        self.0
    }

    fn to_celsius(&self) -> Celsius {
        Celsius(C_TO_DE_OFFSET - self.0 * DE_TO_C_MULTIPLIER)
    }

    fn to_delisle(&self) -> Delisle {
        *self
    }
}

impl TryFrom<f64> for Delisle {
    type Error = TemperatureError;
    fn try_from(value: f64) -> Result<Self, TemperatureError> {
        Delisle::new(value)
    }
}

impl From<Delisle> for f64 {
    fn from(de: Delisle) -> f64 {
        de.0
    }
}

impl fmt::Display for Delisle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°De", self.0)
    }
}

// ============================================================================
// CROSS-SCALE CONVERSIONS
// ============================================================================

// `From<A> for B` for every ordered pair of distinct scales, delegating to
// the `Temperature` conversion so the formulas live in one place.
macro_rules! impl_scale_from {
    ($from:ty => $($to:ty: $method:ident),+ $(,)?) => {
        $(
            impl From<$from> for $to {
                fn from(t: $from) -> $to {
                    t.$method()
                }
            }
        )+
    };
}

impl_scale_from!(Celsius => Fahrenheit: to_fahrenheit, Kelvin: to_kelvin, Rankine: to_rankine, Reaumur: to_reaumur, Delisle: to_delisle);
impl_scale_from!(Fahrenheit => Celsius: to_celsius, Kelvin: to_kelvin, Rankine: to_rankine, Reaumur: to_reaumur, Delisle: to_delisle);
impl_scale_from!(Kelvin => Celsius: to_celsius, Fahrenheit: to_fahrenheit, Rankine: to_rankine, Reaumur: to_reaumur, Delisle: to_delisle);
impl_scale_from!(Rankine => Celsius: to_celsius, Fahrenheit: to_fahrenheit, Kelvin: to_kelvin, Reaumur: to_reaumur, Delisle: to_delisle);
impl_scale_from!(Reaumur => Celsius: to_celsius, Fahrenheit: to_fahrenheit, Kelvin: to_kelvin, Rankine: to_rankine, Delisle: to_delisle);
impl_scale_from!(Delisle => Celsius: to_celsius, Fahrenheit: to_fahrenheit, Kelvin: to_kelvin, Rankine: to_rankine, Reaumur: to_reaumur);

// ============================================================================
// TESTS
// ============================================================================
