//! Unit marker trait.

use crate::dimension::Dimension;
use core::fmt::Debug;

/// Trait implemented by every **unit** marker type.
///
/// A unit does not tag quantities: a [`crate::Quantity`] always stores its magnitude in the base SI unit of its
/// dimension. A unit only describes how a raw number written in that unit maps onto that canonical magnitude:
///
/// ```text
/// magnitude = raw * SCALE + OFFSET
/// raw       = (magnitude - OFFSET) / SCALE
/// ```
///
/// * `SCALE` is the factor from one of this unit to the base SI unit (`Kilometer::SCALE == 1000.0`).
/// * `OFFSET` is zero for every linear unit and nonzero only for affine temperature scales
///   (`DegreeCelsius::OFFSET == 273.15`).
/// * `SYMBOL` is the printable string (e.g. `"km"` or `"°C"`).
/// * `Dim` ties the unit to its dimension vector.
///
/// # Invariants
///
/// - Implementations are zero-sized marker types. The catalog's units are unit structs generated with
///   `#[derive(Unit)]`.
/// - `SCALE` is finite and non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Dimension this unit measures.
    type Dim: Dimension;

    /// Unit-to-canonical scale factor.
    const SCALE: f64;

    /// Additive term applied after scaling. Zero for linear units.
    const OFFSET: f64 = 0.0;

    /// Printable symbol.
    const SYMBOL: &'static str;
}
