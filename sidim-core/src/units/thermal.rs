//! Temperature units.
//!
//! The canonical unit is [`Kelvin`]. Celsius and Fahrenheit are *affine*: they carry an offset in addition to a
//! scale, so converting a temperature reading is `raw * SCALE + OFFSET`.
//!
//! A [`Temperature`](crate::kinds::Temperature) quantity is always an absolute temperature in kelvin. Differences
//! of temperatures are also `Temperature` values, and reading a difference back in an affine unit applies the
//! offset; use [`Quantity::value`](crate::Quantity::value) for differences.
//!
//! ```rust
//! use sidim_core::units::thermal::{degrees_celsius, degrees_fahrenheit, DegreeCelsius};
//!
//! assert_eq!(degrees_celsius(0.0).value(), 273.15);
//! assert!((degrees_fahrenheit(212.0).value_in::<DegreeCelsius>() - 100.0).abs() < 1e-9);
//! ```
//!
//! Fahrenheit is stored as `scale = 5/9` and a folded offset, so a reading is `raw * 5/9 + 255.372…` rather than
//! `(raw - 32) * 5/9 + 273.15`. The two agree exactly at 32 °F, 212 °F and -40 °F, and elsewhere differ by a few
//! ULP (451 °F gives `505.9277777777778` where the unfolded form gives `505.92777777777775`).

use crate::kinds::TemperatureDim;

define_unit! {
    /// Kelvin (SI base unit).
    Kelvin, "K", TemperatureDim, 1.0 => kelvins
}

define_unit! {
    /// Degree Celsius: `K = °C + 273.15`.
    DegreeCelsius, "°C", TemperatureDim, 1.0, offset = 273.15 => degrees_celsius
}

define_unit! {
    /// Degree Fahrenheit: `K = (°F - 32) · 5/9 + 273.15`.
    DegreeFahrenheit, "°F", TemperatureDim, 5.0 / 9.0, offset = 273.15 - 32.0 * 5.0 / 9.0 => degrees_fahrenheit
}
