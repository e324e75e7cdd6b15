//! Macros for declaring catalog units and writing unit literals.

/// Declares one catalog unit.
///
/// Each invocation defines:
/// - a unit struct `$name` deriving [`Unit`](crate::Unit) with the given symbol, dimension, scale and optional offset,
/// - a `const fn $ctor(value: f64)` building the quantity from a raw number in that unit.
///
/// The `$scale` argument is the factor to the base SI unit, i.e. `1 $sym = $scale` canonical units.
macro_rules! define_unit {
    (
        $(#[$attr:meta])*
        $name:ident, $sym:literal, $dim:ty, $scale:expr $(, offset = $offset:expr)? => $ctor:ident
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, ::sidim_derive::Unit)]
        #[unit(symbol = $sym, dimension = $dim, scale = $scale $(, offset = $offset)?)]
        pub struct $name;

        #[doc = concat!("Quantity from a number of [`", stringify!($name), "`] (`", $sym, "`).")]
        #[inline]
        pub const fn $ctor(value: f64) -> $crate::Quantity<$dim> {
            $crate::Quantity::<$dim>::from_unit::<$name>(value)
        }
    };
}

/// Builds a quantity from a numeric literal and a unit suffix.
///
/// The suffix is any name from [`suffix`](crate::suffix). The literal is converted with the suffix's scale and
/// offset, so `qty!(2 km)` is a [`Length`](crate::kinds::Length) of 2000 m.
///
/// ```rust
/// use sidim_core::qty;
/// use sidim_core::kinds::{Energy, Length, Temperature};
///
/// let d: Length = qty!(2 km);
/// assert_eq!(d.value(), 2000.0);
///
/// const E: Energy = qty!(1 kcal);
/// assert_eq!(E.value(), 4184.0);
///
/// let t: Temperature = qty!(0 degC);
/// assert_eq!(t.value(), 273.15);
/// ```
///
/// A leading minus sign negates the already-converted quantity. For a suffix with an offset this is not the same as
/// converting the negative number:
///
/// ```rust
/// use sidim_core::qty;
/// use sidim_core::units::thermal::degrees_celsius;
///
/// assert_eq!(qty!(-40.0 degC).value(), -313.15);
/// assert_eq!(degrees_celsius(-40.0).value(), 233.14999999999998);
/// ```
#[macro_export]
macro_rules! qty {
    (- $value:literal $suffix:tt) => {
        $crate::qty!($value $suffix).neg()
    };
    ($value:literal in) => {
        $crate::Quantity::<<$crate::suffix::r#in as $crate::Unit>::Dim>::from_unit::<$crate::suffix::r#in>(
            $value as f64,
        )
    };
    ($value:literal $suffix:ident) => {
        $crate::Quantity::<<$crate::suffix::$suffix as $crate::Unit>::Dim>::from_unit::<$crate::suffix::$suffix>(
            $value as f64,
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::kinds::*;
    use approx::assert_relative_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // qty!
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn integer_and_float_literals() {
        let a: Length = qty!(5 km);
        let b: Length = qty!(5.0 km);
        assert_eq!(a, b);
        assert_eq!(a.value(), 5000.0);
    }

    #[test]
    fn keyword_suffix() {
        let l: Length = qty!(12 in);
        assert_relative_eq!(l.value(), 0.3048, max_relative = 1e-15);
    }

    #[test]
    fn usable_in_const() {
        const P: Pressure = qty!(1 atm);
        const Q: Charge = qty!(-3 uC);
        assert_eq!(P.value(), 101_325.0);
        assert_relative_eq!(Q.value(), -3e-6, max_relative = 1e-15);
    }

    #[test]
    fn negative_linear_literal_is_plain_negation() {
        let t: Time = qty!(-2 min);
        assert_eq!(t.value(), -120.0);
    }

    #[test]
    fn negative_affine_literal_negates_after_offset() {
        let c: Temperature = qty!(-40.0 degC);
        assert_relative_eq!(c.value(), -313.15, max_relative = 1e-15);
        let f: Temperature = qty!(-40.0 degF);
        assert_relative_eq!(f.value(), -277.594_444_444_444_4, max_relative = 1e-12);
    }

    #[test]
    fn aliases_agree() {
        assert_eq!(qty!(3 Da), qty!(3 u));
        assert_eq!(qty!(3 lb), qty!(3 lbm));
    }
}
