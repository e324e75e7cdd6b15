//! Quantity type and its implementations.

use crate::dimension::{DimAdd, DimSub, Dimension, DivDim, MulDim};
use crate::format::{write_exponents, DimensionSymbol, InUnit};
use crate::kinds::DimensionlessDim;
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A magnitude tagged with a dimension vector.
///
/// `Quantity<D>` wraps an `f64` expressed in the base SI unit implied by `D` (metres for a length, joules for an
/// energy, kelvin for a temperature). The dimension exists only in the type, so a quantity has the size and cost of a
/// bare `f64`.
///
/// Every operator yields a new value; there are no compound-assignment operators.
///
/// # Examples
///
/// ```rust
/// use sidim_core::kinds::{Area, Length, Time, Velocity};
///
/// let side = Length::new(5.0);
/// let area: Area = side * side;
/// assert_eq!(area.value(), 25.0);
///
/// let v: Velocity = Length::new(10.0) / Time::new(2.0);
/// assert_eq!(v.value(), 5.0);
/// ```
///
/// Mixing dimensions in a same-dimension operator does not build:
///
/// ```compile_fail
/// use sidim_core::kinds::{Length, Time};
///
/// let _ = Length::new(1.0) + Time::new(1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<D: Dimension>(f64, PhantomData<D>);

impl<D: Dimension> Quantity<D> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use sidim_core::kinds::Length;
    /// assert!(Length::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// The zero quantity of this dimension.
    pub const ZERO: Self = Self::new(0.0);

    /// Creates a quantity from a magnitude already in base SI units.
    ///
    /// ```rust
    /// use sidim_core::kinds::Energy;
    /// let e = Energy::new(3.0);
    /// assert_eq!(e.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the magnitude in base SI units.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Creates a quantity from a raw number written in the unit `U`.
    ///
    /// Applies `raw * U::SCALE + U::OFFSET`.
    ///
    /// ```rust
    /// use sidim_core::kinds::Length;
    /// use sidim_core::units::length::Foot;
    ///
    /// let l = Length::from_unit::<Foot>(10.0);
    /// assert!((l.value() - 3.048).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn from_unit<U: Unit<Dim = D>>(raw: f64) -> Self {
        if U::OFFSET == 0.0 {
            Self::new(raw * U::SCALE)
        } else {
            Self::new(raw * U::SCALE + U::OFFSET)
        }
    }

    /// Returns the magnitude expressed in the unit `U`.
    ///
    /// ```rust
    /// use sidim_core::units::thermal::{kelvins, DegreeCelsius};
    ///
    /// let t = kelvins(300.0);
    /// assert!((t.value_in::<DegreeCelsius>() - 26.85).abs() < 1e-9);
    /// ```
    #[inline]
    pub const fn value_in<U: Unit<Dim = D>>(self) -> f64 {
        (self.0 - U::OFFSET) / U::SCALE
    }

    /// Displays the quantity in the unit `U` instead of base SI units.
    #[inline]
    pub const fn display_in<U: Unit<Dim = D>>(self) -> InUnit<U> {
        InUnit::new(self.value_in::<U>())
    }

    /// `Display` value for this quantity's dimension.
    #[inline]
    pub const fn dimension(&self) -> DimensionSymbol<D> {
        DimensionSymbol::new()
    }

    /// The seven exponents of this quantity's dimension.
    #[inline]
    pub const fn exponents(&self) -> [i32; 7] {
        D::EXPONENTS
    }

    /// Const addition of two quantities.
    ///
    /// ```rust
    /// use sidim_core::kinds::Length;
    /// const TOTAL: Length = Length::new(1.0).add(Length::new(2.0));
    /// assert_eq!(TOTAL.value(), 3.0);
    /// ```
    #[inline]
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }

    /// Const subtraction of two quantities.
    #[inline]
    pub const fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }

    /// Const negation.
    #[inline]
    pub const fn neg(self) -> Self {
        Self::new(-self.0)
    }

    /// Const multiplication by a plain number.
    #[inline]
    pub const fn scale(self, factor: f64) -> Self {
        Self::new(self.0 * factor)
    }

    /// Returns the minimum of this quantity and another.
    ///
    /// ```rust
    /// use sidim_core::kinds::Time;
    /// let a = Time::new(3.0);
    /// let b = Time::new(5.0);
    /// assert_eq!(a.min(b).value(), 3.0);
    /// ```
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the maximum of this quantity and another.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> PartialEq for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<Dl, Dr> Mul<Quantity<Dr>> for Quantity<Dl>
where
    Dl: DimAdd<Dr>,
    Dr: Dimension,
{
    type Output = Quantity<MulDim<Dl, Dr>>;
    #[inline]
    fn mul(self, rhs: Quantity<Dr>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<Dl, Dr> Div<Quantity<Dr>> for Quantity<Dl>
where
    Dl: DimSub<Dr>,
    Dr: Dimension,
{
    type Output = Quantity<DivDim<Dl, Dr>>;
    #[inline]
    fn div(self, rhs: Quantity<Dr>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensionless quantities
// ─────────────────────────────────────────────────────────────────────────────

impl From<f64> for Quantity<DimensionlessDim> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Quantity<DimensionlessDim>> for f64 {
    #[inline]
    fn from(q: Quantity<DimensionlessDim>) -> Self {
        q.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        f.write_str(" [")?;
        write_exponents(f, &D::EXPONENTS)?;
        f.write_str("]")
    }
}

impl<D: Dimension> fmt::LowerExp for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerExp::fmt(&self.0, f)?;
        f.write_str(" [")?;
        write_exponents(f, &D::EXPONENTS)?;
        f.write_str("]")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension> Serialize for Quantity<D> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> Deserialize<'de> for Quantity<D> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities together with their dimension.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the dimension string next to the number, for
/// self-describing data files.
///
/// # Examples
///
/// ```rust
/// use sidim_core::kinds::{Length, Pressure};
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Vessel {
///     #[serde(with = "sidim_core::serde_with_dimension")]
///     rated: Pressure,  // Serializes as {"value": 1e6, "dimension": "kg·m^-1·s^-2"}
///
///     height: Length,   // Serializes as 2.5 (default, compact)
/// }
/// ```
#[cfg(all(feature = "serde", feature = "std"))]
pub mod serde_with_dimension {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<D>` as a struct with `value` and `dimension` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 9.81, "dimension": "m·s^-2"}
    /// ```
    pub fn serialize<D, S>(quantity: &Quantity<D>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("dimension", &DimensionSymbol::<D>::new().to_string())?;
        state.end()
    }

    /// Deserializes a `Quantity<D>` from a struct with `value` and optionally `dimension` fields.
    ///
    /// A `dimension` field that does not render the same as `D` is rejected.
    pub fn deserialize<'de, D, De>(deserializer: De) -> Result<Quantity<D>, De::Error>
    where
        D: Dimension,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Dimension,
        }

        struct QuantityVisitor<D>(PhantomData<D>);

        impl<'de, D: Dimension> Visitor<'de> for QuantityVisitor<D> {
            type Value = Quantity<D>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and dimension fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut dimension: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Dimension => {
                            if dimension.is_some() {
                                return Err(de::Error::duplicate_field("dimension"));
                            }
                            dimension = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = dimension {
                    let expected = DimensionSymbol::<D>::new().to_string();
                    if found != expected {
                        return Err(de::Error::custom(format!(
                            "dimension mismatch: expected '{}', found '{}'",
                            expected, found
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "dimension"],
            QuantityVisitor(PhantomData),
        )
    }
}
