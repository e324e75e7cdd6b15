//! Rendering of dimension vectors as unit strings.
//!
//! A dimension renders as the base SI symbols of its nonzero slots, joined with a middle dot, with `^n` appended
//! only when the exponent is not 1. The dimensionless vector renders as `1`.
//!
//! ```rust
//! use sidim_core::format::DimensionSymbol;
//! use sidim_core::kinds::{ForceDim, VelocityDim, DimensionlessDim};
//!
//! assert_eq!(DimensionSymbol::<ForceDim>::new().to_string(), "kg·m·s^-2");
//! assert_eq!(DimensionSymbol::<VelocityDim>::new().to_string(), "m·s^-1");
//! assert_eq!(DimensionSymbol::<DimensionlessDim>::new().to_string(), "1");
//! ```

use crate::dimension::Dimension;
use crate::unit::Unit;
use core::fmt;
use core::marker::PhantomData;

/// Base SI symbols, in slot order.
pub const SYMBOLS: [&str; 7] = ["kg", "m", "s", "A", "K", "mol", "cd"];

/// Writes the unit string for an exponent vector into any text sink.
pub fn write_exponents<W: fmt::Write + ?Sized>(w: &mut W, exponents: &[i32; 7]) -> fmt::Result {
    let mut first = true;
    for (symbol, &exp) in SYMBOLS.iter().zip(exponents.iter()) {
        if exp == 0 {
            continue;
        }
        if !first {
            w.write_char('·')?;
        }
        first = false;
        w.write_str(symbol)?;
        if exp != 1 {
            write!(w, "^{}", exp)?;
        }
    }
    if first {
        w.write_char('1')?;
    }
    Ok(())
}

/// `Display` value for the dimension `D`.
pub struct DimensionSymbol<D: Dimension>(PhantomData<D>);

impl<D: Dimension> DimensionSymbol<D> {
    /// Creates the display value.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<D: Dimension> Default for DimensionSymbol<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dimension> Clone for DimensionSymbol<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for DimensionSymbol<D> {}

impl<D: Dimension> fmt::Debug for DimensionSymbol<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DimensionSymbol({})", self)
    }
}

impl<D: Dimension> fmt::Display for DimensionSymbol<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_exponents(f, &D::EXPONENTS)
    }
}

/// A magnitude expressed in the unit `U`, displayed as `"<value> <symbol>"`.
///
/// Returned by [`crate::Quantity::display_in`]. Precision flags are forwarded to the number.
///
/// ```rust
/// use sidim_core::units::length::{kilometers, Mile};
///
/// let d = kilometers(1.609344);
/// assert_eq!(format!("{:.3}", d.display_in::<Mile>()), "1.000 mi");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct InUnit<U: Unit> {
    value: f64,
    _unit: PhantomData<U>,
}

impl<U: Unit> InUnit<U> {
    pub(crate) const fn new(value: f64) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// The number shown, already converted into `U`.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl<U: Unit> fmt::Display for InUnit<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        write!(f, " {}", U::SYMBOL)
    }
}
