//! Temperature Conversion Core Library
//!
//! Typed values for six temperature scales (Celsius, Fahrenheit, Kelvin,
//! Rankine, Réaumur, Delisle) with validated construction, exact conversion
//! formulas and canonical formatting.
//!
//! ## Overview
//!
//! - Each scale is a `Copy` newtype over `f64`, built through `new`, which
//!   rejects magnitudes beyond absolute zero
//! - The [`Temperature`] trait gives every scale the same conversion and
//!   formatting surface, and works behind `&dyn Temperature`
//! - Celsius is the conversion hub; pairs without a direct formula route
//!   through it
//! - [`AnyTemperature`] selects the scale at runtime

// Core types and utilities
pub mod core_types;

// Re-export core types
pub use core_types::{AnyTemperature, Scale, Temperature, TemperatureError};
pub use core_types::{Celsius, Delisle, Fahrenheit, Kelvin, Rankine, Reaumur};
