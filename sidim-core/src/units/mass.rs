//! Mass units.
//!
//! The canonical unit for this dimension is [`Kilogram`] (`Kilogram::SCALE == 1.0`).
//!
//! - **SI**: kilogram, gram, milligram, tonne.
//! - **Atomic**: unified atomic mass unit (`u`), also available as the dalton (`Da`).
//! - **Avoirdupois and imperial**: pound, ounce, slug.
//!
//! ```rust
//! use sidim_core::units::mass::{grams, Gram, Ounce};
//!
//! let m = grams(28.349523125);
//! assert!((m.value_in::<Ounce>() - 1.0).abs() < 1e-12);
//! assert!((m.value_in::<Gram>() - 28.349523125).abs() < 1e-9);
//! ```

use crate::kinds::{Mass, MassDim};

define_unit! {
    /// Kilogram (SI base unit).
    Kilogram, "kg", MassDim, 1.0 => kilograms
}

define_unit! {
    /// Gram (`1e-3 kg`).
    Gram, "g", MassDim, 1e-3 => grams
}

define_unit! {
    /// Milligram (`1e-6 kg`).
    Milligram, "mg", MassDim, 1e-6 => milligrams
}

define_unit! {
    /// Metric tonne (`1000 kg`).
    Tonne, "t", MassDim, 1e3 => tonnes
}

define_unit! {
    /// Unified atomic mass unit, 1/12 of the mass of a carbon-12 atom (CODATA 2018).
    AtomicMassUnit, "u", MassDim, 1.660_539_066_60e-27 => atomic_mass_units
}

/// Quantity from a number of daltons. The dalton is another name for the [`AtomicMassUnit`].
#[inline]
pub const fn daltons(value: f64) -> Mass {
    atomic_mass_units(value)
}

define_unit! {
    /// International avoirdupois pound (exactly `0.45359237 kg`).
    Pound, "lb", MassDim, 0.453_592_37 => pounds
}

/// Quantity from a number of pounds-mass. Same unit as [`Pound`].
#[inline]
pub const fn pounds_mass(value: f64) -> Mass {
    pounds(value)
}

define_unit! {
    /// Avoirdupois ounce (`1/16 lb`).
    Ounce, "oz", MassDim, 0.028_349_523_125 => ounces
}

define_unit! {
    /// Slug, the mass accelerated at `1 ft/s²` by one pound-force.
    Slug, "slug", MassDim, 14.593_902_937 => slugs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn gram_to_kilogram() {
        let g = grams(1000.0);
        assert_abs_diff_eq!(g.value(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.value_in::<Kilogram>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn tonne_and_milligram() {
        assert_eq!(tonnes(2.5).value(), 2500.0);
        assert_relative_eq!(milligrams(1.0).value_in::<Gram>(), 1e-3, max_relative = 1e-12);
    }

    #[test]
    fn pound_is_sixteen_ounces() {
        assert_relative_eq!(pounds(1.0).value_in::<Ounce>(), 16.0, max_relative = 1e-12);
    }

    #[test]
    fn slug_in_pounds() {
        // 1 slug ≈ 32.174 lb
        assert_relative_eq!(slugs(1.0).value_in::<Pound>(), 32.174_048_56, max_relative = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Aliases
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn dalton_is_atomic_mass_unit() {
        assert_eq!(daltons(12.0), atomic_mass_units(12.0));
        assert_eq!(pounds_mass(3.0), pounds(3.0));
    }

    #[test]
    fn symbols() {
        assert_eq!(Kilogram::SYMBOL, "kg");
        assert_eq!(AtomicMassUnit::SYMBOL, "u");
        assert_eq!(format!("{}", Pound), "lb");
        assert_eq!(format!("{:.2}", kilograms(1.0).display_in::<Pound>()), "2.20 lb");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_g_kg(g in 1e-6..1e6f64) {
            let back = grams(g).value_in::<Gram>();
            prop_assert!((back - g).abs() < 1e-9 * g.abs().max(1.0));
        }

        #[test]
        fn prop_g_kg_ratio(g in 1e-6..1e6f64) {
            let m = grams(g);
            prop_assert!((g / m.value() - 1000.0).abs() < 1e-9);
        }
    }
}
