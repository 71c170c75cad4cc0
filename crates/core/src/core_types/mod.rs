//! Core types: scale value newtypes, scale tags and errors

pub mod error;
pub mod scale;
pub mod units;

pub use error::TemperatureError;
pub use scale::{AnyTemperature, Scale};
pub use units::{Celsius, Delisle, Fahrenheit, Kelvin, Rankine, Reaumur, Temperature};
