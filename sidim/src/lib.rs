//! Physical quantities whose SI dimension is checked at compile time.
//!
//! `sidim` is the user-facing crate in this workspace. It re-exports the full API from `sidim-core`: the dimension
//! algebra, the [`Quantity`] type, the named kinds (`Length`, `Velocity`, `Energy`, …), the unit catalog, the
//! [`qty!`] literal macro and the physical constants.
//!
//! A value is always a `Quantity<D>`, where `D` is a zero-sized type holding the seven SI exponents
//! `[M, L, T, I, Θ, N, J]`. The magnitude is stored in base SI units, so the only runtime cost is an `f64`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Derives result dimensions of `*`, `/`, integer powers and square roots automatically.
//! - Converts literals in common units (`qty!(5 km)`, `kilocalories(1.0)`) to base SI on the way in.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Telling apart kinds with the same dimension (torque and energy, hertz and becquerel).
//! - Vector quantities or uncertainty propagation.
//!
//! # Quick start
//!
//! ```rust
//! use sidim::{qty, Area, Length, Time, Velocity};
//!
//! let side = Length::new(5.0);
//! let a: Area = side * side;
//! assert_eq!(a.value(), 25.0);
//!
//! let v: Velocity = qty!(10 m) / Time::new(2.0);
//! assert_eq!(v.value(), 5.0);
//! assert_eq!(v.to_string(), "5 [m·s^-1]");
//! ```
//!
//! Units only matter at the edges:
//!
//! ```rust
//! use sidim::{kilometers, Mile, Length};
//!
//! let d: Length = kilometers(42.195);
//! assert!((d.value_in::<Mile>() - 26.218_757_5).abs() < 1e-6);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! ```compile_fail
//! use sidim::{Length, Time};
//!
//! let _ = Length::new(1.0) + Time::new(1.0); // cannot add different dimensions
//! ```
//!
//! ```compile_fail
//! use sidim::Length;
//!
//! let _ = Length::new(4.0).sqrt(); // odd length exponent has no exact square root
//! ```
//!
//! ```compile_fail
//! use sidim::{Length, Time};
//!
//! let _ = Length::new(1.0) == Time::new(1.0); // cannot compare different dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped by domain under modules (also re-exported at the crate root for convenience):
//!
//! - `sidim::length` (metres, imperial, astronomical, plus litres and barns)
//! - `sidim::mass` (kilograms, atomic mass unit, pounds, …)
//! - `sidim::time` (seconds through Julian years)
//! - `sidim::electromagnetic` (amperes, volts, ohms, farads, henries, …)
//! - `sidim::thermal` (kelvin, degrees Celsius and Fahrenheit)
//! - `sidim::mechanics` (forces, energies, powers, pressures, frequencies)
//! - `sidim::chemistry`, `sidim::photometry`, `sidim::radiation`
//!
//! Named kinds live in `sidim::kinds`, literal suffixes in `sidim::suffix` and constants in `sidim::constants`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `sidim-core`.
//! - `serde`: enables `serde` support for `Quantity<D>`; serialization is the raw `f64` value only. With `std`,
//!   [`serde_with_dimension`] also writes the dimension string.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! sidim = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Arithmetic follows
//! IEEE-754 behavior: division by zero yields a signed infinity, `0/0` and square roots of negative magnitudes yield
//! NaN, and NaN propagates.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use sidim_core::*;

/// Derive macro used by `sidim-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit`, so it is intended for use inside `sidim-core` (or crates exposing
/// the same crate-root API). Most users should not need this.
pub use sidim_derive::Unit;

pub use sidim_core::kinds::*;

pub use sidim_core::units::chemistry::*;
pub use sidim_core::units::electromagnetic::*;
pub use sidim_core::units::length::*;
pub use sidim_core::units::mass::*;
pub use sidim_core::units::mechanics::*;
pub use sidim_core::units::photometry::*;
pub use sidim_core::units::radiation::*;
pub use sidim_core::units::thermal::*;
pub use sidim_core::units::time::*;
