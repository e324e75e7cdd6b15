//! Length units, plus the area and volume units of the catalog.
//!
//! The canonical unit for this dimension is [`Meter`] (`Meter::SCALE == 1.0`).
//!
//! Notes on definitions used here:
//!
//! - **Imperial units** follow the international definitions (the inch is exactly `0.0254 m`).
//! - **Astronomical unit (au)** is the IAU 2012 value `149_597_870_700 m`.
//! - **Light-year (ly)** is the distance light travels in one Julian year (`365.25 d`).
//! - **Parsec (pc)** is `au * 648000 / π`, rounded to double precision.
//!
//! ```rust
//! use sidim_core::units::length::{astronomical_units, Kilometer};
//!
//! let au = astronomical_units(1.0);
//! assert_eq!(au.value_in::<Kilometer>(), 149_597_870.7);
//! ```

use crate::kinds::{AreaDim, LengthDim, VolumeDim};

// ─────────────────────────────────────────────────────────────────────────────
// SI
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Metre (SI base unit).
    Meter, "m", LengthDim, 1.0 => meters
}

define_unit! {
    /// Kilometre (`1000 m`).
    Kilometer, "km", LengthDim, 1e3 => kilometers
}

define_unit! {
    /// Centimetre (`1e-2 m`).
    Centimeter, "cm", LengthDim, 1e-2 => centimeters
}

define_unit! {
    /// Millimetre (`1e-3 m`).
    Millimeter, "mm", LengthDim, 1e-3 => millimeters
}

// ─────────────────────────────────────────────────────────────────────────────
// Imperial and nautical
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// International inch (`0.0254 m`).
    Inch, "in", LengthDim, 0.0254 => inches
}

define_unit! {
    /// International foot (`12 in`).
    Foot, "ft", LengthDim, 0.3048 => feet
}

define_unit! {
    /// International yard (`3 ft`).
    Yard, "yd", LengthDim, 0.9144 => yards
}

define_unit! {
    /// Statute mile (`5280 ft`).
    Mile, "mi", LengthDim, 1609.344 => miles
}

define_unit! {
    /// International nautical mile (`1852 m`).
    NauticalMile, "nmi", LengthDim, 1852.0 => nautical_miles
}

// ─────────────────────────────────────────────────────────────────────────────
// Astronomy
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Astronomical unit.
    AstronomicalUnit, "au", LengthDim, 1.495_978_707e11 => astronomical_units
}

define_unit! {
    /// Light-year.
    LightYear, "ly", LengthDim, 9.460_730_472_580_8e15 => light_years
}

define_unit! {
    /// Parsec.
    Parsec, "pc", LengthDim, 3.085_677_581_491_367e16 => parsecs
}

define_unit! {
    /// Kiloparsec (`1e3 pc`).
    Kiloparsec, "kpc", LengthDim, 3.085_677_581_491_367e19 => kiloparsecs
}

define_unit! {
    /// Megaparsec (`1e6 pc`).
    Megaparsec, "Mpc", LengthDim, 3.085_677_581_491_367e22 => megaparsecs
}

// ─────────────────────────────────────────────────────────────────────────────
// Area and volume
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Barn (`1e-28 m²`), the nuclear cross-section unit.
    Barn, "b", AreaDim, 1e-28 => barns
}

define_unit! {
    /// Litre (`1e-3 m³`).
    Liter, "L", VolumeDim, 1e-3 => liters
}

define_unit! {
    /// Millilitre (`1e-6 m³`).
    Milliliter, "mL", VolumeDim, 1e-6 => milliliters
}
