//! Dimension vectors and their compile-time algebra.
//!
//! A *dimension* is the 7-slot exponent vector over the SI base quantities, in the fixed order
//! mass, length, time, current, temperature, amount, luminosity. It is encoded as [`Dim`], a zero-sized type whose
//! parameters are [`typenum`] integers, so every dimension exists only in the type system.
//!
//! The four operations of the algebra are traits whose associated `Output` is the resulting dimension:
//!
//! | operation            | trait          | alias             | used by      |
//! |----------------------|----------------|-------------------|--------------|
//! | componentwise sum    | [`DimAdd`]     | [`MulDim<A, B>`]  | `q1 * q2`    |
//! | componentwise diff   | [`DimSub`]     | [`DivDim<A, B>`]  | `q1 / q2`    |
//! | scale by integer `N` | [`DimScale`]   | [`PowDim<D, N>`]  | `pow::<N, _>`|
//! | halve (all even)     | [`DimHalve`]   | [`SqrtDim<D>`]    | `sqrt`       |
//!
//! ```rust
//! use sidim_core::{MulDim, DivDim, Dimension};
//! use sidim_core::kinds::{LengthDim, TimeDim, VelocityDim};
//!
//! type Speed = DivDim<LengthDim, TimeDim>;
//! assert_eq!(<Speed as Dimension>::EXPONENTS, <VelocityDim as Dimension>::EXPONENTS);
//! assert_eq!(<MulDim<Speed, TimeDim> as Dimension>::EXPONENTS, [0, 1, 0, 0, 0, 0, 0]);
//! ```
//!
//! Halving an odd exponent has no implementation, so it fails to build:
//!
//! ```compile_fail
//! use sidim_core::SqrtDim;
//! use sidim_core::kinds::VolumeDim;
//!
//! fn needs_root<D>() {}
//! needs_root::<SqrtDim<VolumeDim>>(); // m^3 has no square root
//! ```
//!
//! One odd slot is enough. Capacitance is `kg^-1·m^-2·s^4·A^2`:
//!
//! ```compile_fail
//! use sidim_core::SqrtDim;
//! use sidim_core::kinds::CapacitanceDim;
//!
//! fn needs_root<D>() {}
//! needs_root::<SqrtDim<CapacitanceDim>>();
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Sub};
use typenum::{Diff, Integer, PartialDiv, PartialQuot, Prod, Sum, P2};

/// Trait implemented by every **dimension vector**.
///
/// Each associated type is the exponent of one SI base quantity. Only [`Dim`] implements this trait inside the
/// crate; every dimension in use is either a named kind from [`crate::kinds`] or the output of the algebra.
pub trait Dimension: Copy + fmt::Debug + 'static {
    /// Exponent of mass (kg).
    type Mass: Integer;
    /// Exponent of length (m).
    type Length: Integer;
    /// Exponent of time (s).
    type Time: Integer;
    /// Exponent of electric current (A).
    type Current: Integer;
    /// Exponent of thermodynamic temperature (K).
    type Temperature: Integer;
    /// Exponent of amount of substance (mol).
    type Amount: Integer;
    /// Exponent of luminous intensity (cd).
    type Luminosity: Integer;

    /// The seven exponents as plain integers, in slot order.
    ///
    /// Used for display only; no arithmetic ever reads it.
    const EXPONENTS: [i32; 7] = [
        <Self::Mass as Integer>::I32,
        <Self::Length as Integer>::I32,
        <Self::Time as Integer>::I32,
        <Self::Current as Integer>::I32,
        <Self::Temperature as Integer>::I32,
        <Self::Amount as Integer>::I32,
        <Self::Luminosity as Integer>::I32,
    ];
}

/// Dimension vector `kg^M · m^L · s^T · A^I · K^Th · mol^N · cd^J`.
///
/// Never instantiated with a meaningful value: it exists to tag [`crate::Quantity`].
pub struct Dim<M, L, T, I, Th, N, J>(PhantomData<(M, L, T, I, Th, N, J)>);

impl<M, L, T, I, Th, N, J> Clone for Dim<M, L, T, I, Th, N, J> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, L, T, I, Th, N, J> Copy for Dim<M, L, T, I, Th, N, J> {}

impl<M, L, T, I, Th, N, J> fmt::Debug for Dim<M, L, T, I, Th, N, J>
where
    M: Integer,
    L: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    N: Integer,
    J: Integer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dim").field(&Self::EXPONENTS).finish()
    }
}

impl<M, L, T, I, Th, N, J> Dimension for Dim<M, L, T, I, Th, N, J>
where
    M: Integer,
    L: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    N: Integer,
    J: Integer,
{
    type Mass = M;
    type Length = L;
    type Time = T;
    type Current = I;
    type Temperature = Th;
    type Amount = N;
    type Luminosity = J;
}

// ─────────────────────────────────────────────────────────────────────────────
// Algebra
// ─────────────────────────────────────────────────────────────────────────────

/// Componentwise sum of two dimension vectors (backs multiplication).
pub trait DimAdd<Rhs: Dimension>: Dimension {
    /// The summed dimension.
    type Output: Dimension;
}

impl<Dl, Dr> DimAdd<Dr> for Dl
where
    Dl: Dimension,
    Dr: Dimension,
    Dl::Mass: Add<Dr::Mass>,
    Dl::Length: Add<Dr::Length>,
    Dl::Time: Add<Dr::Time>,
    Dl::Current: Add<Dr::Current>,
    Dl::Temperature: Add<Dr::Temperature>,
    Dl::Amount: Add<Dr::Amount>,
    Dl::Luminosity: Add<Dr::Luminosity>,
    Sum<Dl::Mass, Dr::Mass>: Integer,
    Sum<Dl::Length, Dr::Length>: Integer,
    Sum<Dl::Time, Dr::Time>: Integer,
    Sum<Dl::Current, Dr::Current>: Integer,
    Sum<Dl::Temperature, Dr::Temperature>: Integer,
    Sum<Dl::Amount, Dr::Amount>: Integer,
    Sum<Dl::Luminosity, Dr::Luminosity>: Integer,
{
    type Output = Dim<
        Sum<Dl::Mass, Dr::Mass>,
        Sum<Dl::Length, Dr::Length>,
        Sum<Dl::Time, Dr::Time>,
        Sum<Dl::Current, Dr::Current>,
        Sum<Dl::Temperature, Dr::Temperature>,
        Sum<Dl::Amount, Dr::Amount>,
        Sum<Dl::Luminosity, Dr::Luminosity>,
    >;
}

/// Componentwise difference of two dimension vectors (backs division).
pub trait DimSub<Rhs: Dimension>: Dimension {
    /// The difference dimension.
    type Output: Dimension;
}

impl<Dl, Dr> DimSub<Dr> for Dl
where
    Dl: Dimension,
    Dr: Dimension,
    Dl::Mass: Sub<Dr::Mass>,
    Dl::Length: Sub<Dr::Length>,
    Dl::Time: Sub<Dr::Time>,
    Dl::Current: Sub<Dr::Current>,
    Dl::Temperature: Sub<Dr::Temperature>,
    Dl::Amount: Sub<Dr::Amount>,
    Dl::Luminosity: Sub<Dr::Luminosity>,
    Diff<Dl::Mass, Dr::Mass>: Integer,
    Diff<Dl::Length, Dr::Length>: Integer,
    Diff<Dl::Time, Dr::Time>: Integer,
    Diff<Dl::Current, Dr::Current>: Integer,
    Diff<Dl::Temperature, Dr::Temperature>: Integer,
    Diff<Dl::Amount, Dr::Amount>: Integer,
    Diff<Dl::Luminosity, Dr::Luminosity>: Integer,
{
    type Output = Dim<
        Diff<Dl::Mass, Dr::Mass>,
        Diff<Dl::Length, Dr::Length>,
        Diff<Dl::Time, Dr::Time>,
        Diff<Dl::Current, Dr::Current>,
        Diff<Dl::Temperature, Dr::Temperature>,
        Diff<Dl::Amount, Dr::Amount>,
        Diff<Dl::Luminosity, Dr::Luminosity>,
    >;
}

/// Every exponent multiplied by the type-level integer `E` (backs integer powers).
pub trait DimScale<E: Integer>: Dimension {
    /// The scaled dimension.
    type Output: Dimension;
}

impl<D, E> DimScale<E> for D
where
    D: Dimension,
    E: Integer,
    D::Mass: Mul<E>,
    D::Length: Mul<E>,
    D::Time: Mul<E>,
    D::Current: Mul<E>,
    D::Temperature: Mul<E>,
    D::Amount: Mul<E>,
    D::Luminosity: Mul<E>,
    Prod<D::Mass, E>: Integer,
    Prod<D::Length, E>: Integer,
    Prod<D::Time, E>: Integer,
    Prod<D::Current, E>: Integer,
    Prod<D::Temperature, E>: Integer,
    Prod<D::Amount, E>: Integer,
    Prod<D::Luminosity, E>: Integer,
{
    type Output = Dim<
        Prod<D::Mass, E>,
        Prod<D::Length, E>,
        Prod<D::Time, E>,
        Prod<D::Current, E>,
        Prod<D::Temperature, E>,
        Prod<D::Amount, E>,
        Prod<D::Luminosity, E>,
    >;
}

/// Every exponent divided by two (backs square roots).
///
/// Implemented only when all seven exponents are even: `typenum` provides [`PartialDiv`] solely for exact
/// divisions, so an odd exponent leaves this trait unimplemented and the program fails to build.
#[diagnostic::on_unimplemented(
    message = "cannot take the square root of dimension `{Self}`",
    label = "every exponent must be even"
)]
pub trait DimHalve: Dimension {
    /// The halved dimension.
    type Output: Dimension;
}

impl<D> DimHalve for D
where
    D: Dimension,
    D::Mass: PartialDiv<P2>,
    D::Length: PartialDiv<P2>,
    D::Time: PartialDiv<P2>,
    D::Current: PartialDiv<P2>,
    D::Temperature: PartialDiv<P2>,
    D::Amount: PartialDiv<P2>,
    D::Luminosity: PartialDiv<P2>,
    PartialQuot<D::Mass, P2>: Integer,
    PartialQuot<D::Length, P2>: Integer,
    PartialQuot<D::Time, P2>: Integer,
    PartialQuot<D::Current, P2>: Integer,
    PartialQuot<D::Temperature, P2>: Integer,
    PartialQuot<D::Amount, P2>: Integer,
    PartialQuot<D::Luminosity, P2>: Integer,
{
    type Output = Dim<
        PartialQuot<D::Mass, P2>,
        PartialQuot<D::Length, P2>,
        PartialQuot<D::Time, P2>,
        PartialQuot<D::Current, P2>,
        PartialQuot<D::Temperature, P2>,
        PartialQuot<D::Amount, P2>,
        PartialQuot<D::Luminosity, P2>,
    >;
}

/// Dimension of the product of quantities with dimensions `A` and `B`.
pub type MulDim<A, B> = <A as DimAdd<B>>::Output;

/// Dimension of the quotient of a quantity with dimension `A` by one with dimension `B`.
pub type DivDim<A, B> = <A as DimSub<B>>::Output;

/// Dimension of a quantity with dimension `D` raised to the type-level integer power `E`.
pub type PowDim<D, E> = <D as DimScale<E>>::Output;

/// Dimension of the square root of a quantity with dimension `D`.
pub type SqrtDim<D> = <D as DimHalve>::Output;
