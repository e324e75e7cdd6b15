//! The unit catalog, grouped by physical domain.
//!
//! Every unit is a zero-sized marker implementing [`Unit`](crate::Unit) plus a `const fn` constructor taking a raw
//! number in that unit. Quantities always store base SI magnitudes, so a unit only matters on the way in
//! ([`Quantity::from_unit`](crate::Quantity::from_unit)) and on the way out
//! ([`Quantity::value_in`](crate::Quantity::value_in), [`Quantity::display_in`](crate::Quantity::display_in)).
//!
//! ## Modules
//!
//! - [`mass`]: kilogram ladder, atomic mass unit, avoirdupois and imperial units.
//! - [`length`]: metre ladder, imperial and nautical units, astronomical distances, plus barn, litre and millilitre.
//! - [`time`]: second ladder up to the Julian year.
//! - [`mechanics`]: velocity, force, energy, power, pressure and frequency units.
//! - [`electromagnetic`]: current, charge, voltage, resistance, conductance, capacitance, inductance, flux, field.
//! - [`thermal`]: kelvin and the affine Celsius and Fahrenheit scales.
//! - [`chemistry`]: mole ladder.
//! - [`radiation`]: activity and dose units.
//! - [`photometry`]: candela, lumen, lux.

pub mod chemistry;
pub mod electromagnetic;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod photometry;
pub mod radiation;
pub mod thermal;
pub mod time;
