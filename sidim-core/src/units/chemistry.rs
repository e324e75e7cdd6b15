//! Amount-of-substance units.
//!
//! ```rust
//! use sidim_core::kinds::Concentration;
//! use sidim_core::units::chemistry::millimoles;
//! use sidim_core::units::length::liters;
//!
//! let c: Concentration = millimoles(5.0) / liters(1.0);
//! assert!((c.value() - 5.0).abs() < 1e-12); // mol/m³
//! ```

use crate::kinds::AmountDim;

define_unit! {
    /// Mole (SI base unit).
    Mole, "mol", AmountDim, 1.0 => moles
}

define_unit! {
    /// Millimole (`1e-3 mol`).
    Millimole, "mmol", AmountDim, 1e-3 => millimoles
}
