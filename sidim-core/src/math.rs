//! Integer power, square root and absolute value.
//!
//! Each function takes a [`Quantity<D>`] and derives the dimension of its result through the algebra, so the
//! "argument is a quantity" requirement is an ordinary trait bound on `D`.
//!
//! ```rust
//! use sidim_core::{pow, sqrt, abs};
//! use sidim_core::kinds::{Area, Length};
//! use sidim_core::typenum::P2;
//!
//! let side = Length::new(-3.0);
//! let a: Area = pow::<P2, _>(side);
//! assert_eq!(a.value(), 9.0);
//! assert_eq!(sqrt(a).value(), 3.0);
//! assert_eq!(abs(side).value(), 3.0);
//! ```
//!
//! The square root of a dimension with an odd exponent does not build:
//!
//! ```compile_fail
//! use sidim_core::sqrt;
//! use sidim_core::kinds::Length;
//!
//! let _ = sqrt(Length::new(4.0));
//! ```
//!
//! Neither does one whose exponents are even except for a single slot (energy is `kg·m^2·s^-2`):
//!
//! ```compile_fail
//! use sidim_core::sqrt;
//! use sidim_core::kinds::Energy;
//!
//! let _ = sqrt(Energy::new(1.0));
//! ```
//!
//! ```compile_fail
//! use sidim_core::kinds::Capacitance;
//!
//! let _ = Capacitance::new(9.0).sqrt();
//! ```

use crate::dimension::{DimHalve, DimScale, Dimension, PowDim, SqrtDim};
use crate::quantity::Quantity;
use typenum::Integer;

#[inline]
fn float_pow(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    {
        x.powf(n as f64)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(x, n as f64)
    }
}

#[inline]
fn float_sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrt(x)
    }
}

#[inline]
fn float_abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fabs(x)
    }
}

/// Raises `q` to the type-level integer power `N`.
///
/// `N` may be negative or zero; `pow::<Z0, _>` of a finite magnitude is `1.0` with the dimensionless vector.
#[inline]
pub fn pow<N, D>(q: Quantity<D>) -> Quantity<PowDim<D, N>>
where
    N: Integer,
    D: DimScale<N>,
{
    Quantity::new(float_pow(q.value(), N::I32))
}

/// Square root of `q`. Every exponent of `D` must be even. Negative magnitudes give NaN.
#[inline]
pub fn sqrt<D: DimHalve>(q: Quantity<D>) -> Quantity<SqrtDim<D>> {
    Quantity::new(float_sqrt(q.value()))
}

/// Absolute value of `q`, same dimension.
#[inline]
pub fn abs<D: Dimension>(q: Quantity<D>) -> Quantity<D> {
    Quantity::new(float_abs(q.value()))
}

impl<D: Dimension> Quantity<D> {
    /// Method form of [`pow`].
    ///
    /// ```rust
    /// use sidim_core::kinds::{Time, Frequency};
    /// use sidim_core::typenum::N1;
    ///
    /// let f: Frequency = Time::new(0.25).powi::<N1>();
    /// assert_eq!(f.value(), 4.0);
    /// ```
    #[inline]
    pub fn powi<N>(self) -> Quantity<PowDim<D, N>>
    where
        N: Integer,
        D: DimScale<N>,
    {
        pow::<N, D>(self)
    }

    /// Method form of [`sqrt`].
    #[inline]
    pub fn sqrt(self) -> Quantity<SqrtDim<D>>
    where
        D: DimHalve,
    {
        sqrt(self)
    }

    /// Method form of [`abs`].
    ///
    /// ```rust
    /// use sidim_core::kinds::Voltage;
    /// assert_eq!(Voltage::new(-10.0).abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        abs(self)
    }
}
