//! Core type system for dimensionally checked physical quantities.
//!
//! `sidim-core` encodes the SI dimension of a value in its type:
//!
//! - A *dimension* is a 7-slot exponent vector over mass, length, time, current, temperature, amount and luminosity,
//!   encoded as [`Dim`] over [`typenum`] integers.
//! - A value is a [`Quantity<D>`], an `f64` in base SI units tagged with its dimension.
//! - Multiplying, dividing, raising to integer powers and taking square roots derive the result dimension at compile
//!   time; adding, subtracting and comparing require identical dimensions.
//! - A *unit* is a zero-sized marker implementing [`Unit`]; it only converts raw numbers on the way in and out.
//!
//! Most users should depend on `sidim` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimension errors (length + time, `sqrt` of a volume, …).
//! - Automatic result dimensions (`Length / Time` is a [`kinds::Velocity`]) with zero runtime overhead.
//! - A catalog of units, literal suffixes ([`qty!`]) and physical [`constants`].
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Vector or tensor quantities, runtime-selected unit systems, uncertainty propagation.
//! - Distinguishing kinds that share a dimension (hertz and becquerel, torque and energy).
//!
//! # Quick start
//!
//! ```rust
//! use sidim_core::kinds::{Length, Time, Velocity};
//! use sidim_core::qty;
//!
//! let d: Length = qty!(100 m);
//! let t: Time = qty!(20 s);
//! let v: Velocity = d / t;
//! assert_eq!(v.value(), 5.0);
//! assert_eq!(v.to_string(), "5 [m·s^-1]");
//! ```
//!
//! Dimension errors are build errors:
//!
//! ```compile_fail
//! use sidim_core::kinds::{Length, Time};
//!
//! let shorter = Length::new(1.0) < Time::new(2.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `sidim-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! sidim-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<D>`; serialization is the raw `f64` value only. With `std` also
//!   enabled, [`serde_with_dimension`] keeps the dimension string alongside the value.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Arithmetic is a
//! pure `f64` computation; it does not panic, and it follows IEEE-754 behavior (division by zero gives a signed
//! infinity, `0/0` and square roots of negatives give NaN, NaN propagates).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod dimension;
mod math;
mod quantity;
mod unit;

pub mod constants;
pub mod format;
pub mod kinds;
pub mod suffix;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{Dim, DimAdd, DimHalve, DimScale, DimSub, Dimension, DivDim, MulDim, PowDim, SqrtDim};
pub use math::{abs, pow, sqrt};
pub use quantity::Quantity;
pub use unit::Unit;

pub use typenum;

#[cfg(all(feature = "serde", feature = "std"))]
pub use quantity::serde_with_dimension;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by domain)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by domain).
///
/// These are defined in `sidim-core` so that the `Unit` derive, which expands to `crate::Unit`, resolves against
/// this crate.
pub mod units;

pub use units::chemistry;
pub use units::electromagnetic;
pub use units::length;
pub use units::mass;
pub use units::mechanics;
pub use units::photometry;
pub use units::radiation;
pub use units::thermal;
pub use units::time;
