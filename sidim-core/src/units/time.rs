//! Time units.
//!
//! The canonical unit for this dimension is [`Second`] (`Second::SCALE == 1.0`). Days are exactly `86_400 s`
//! and the year is the Julian year of `365.25 d`.
//!
//! ```rust
//! use sidim_core::units::time::{days, Hour};
//!
//! assert_eq!(days(1.5).value_in::<Hour>(), 36.0);
//! ```

use crate::kinds::TimeDim;

define_unit! {
    /// Second (SI base unit).
    Second, "s", TimeDim, 1.0 => seconds
}

define_unit! {
    /// Millisecond (`1e-3 s`).
    Millisecond, "ms", TimeDim, 1e-3 => milliseconds
}

define_unit! {
    /// Microsecond (`1e-6 s`).
    Microsecond, "µs", TimeDim, 1e-6 => microseconds
}

define_unit! {
    /// Minute (`60 s`).
    Minute, "min", TimeDim, 60.0 => minutes
}

define_unit! {
    /// Hour (`3600 s`).
    Hour, "h", TimeDim, 3_600.0 => hours
}

define_unit! {
    /// Day (`86400 s`).
    Day, "d", TimeDim, 86_400.0 => days
}

define_unit! {
    /// Julian year (`365.25 d`).
    Year, "yr", TimeDim, 31_557_600.0 => years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{Frequency, Time};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn minute_hour_day() {
        assert_eq!(minutes(2.0).value(), 120.0);
        assert_eq!(hours(1.0).value_in::<Minute>(), 60.0);
        assert_eq!(days(1.0).value_in::<Hour>(), 24.0);
    }

    #[test]
    fn julian_year() {
        assert_eq!(years(1.0).value_in::<Day>(), 365.25);
    }

    #[test]
    fn sub_second() {
        assert_relative_eq!(milliseconds(250.0).value(), 0.25, max_relative = 1e-15);
        assert_relative_eq!(microseconds(1.0).value_in::<Millisecond>(), 1e-3, max_relative = 1e-12);
    }

    #[test]
    fn period_to_frequency() {
        let t: Time = milliseconds(20.0);
        let f: Frequency = t.powi::<typenum::N1>();
        assert_relative_eq!(f.value(), 50.0, max_relative = 1e-12);
    }

    #[test]
    fn display_in_minutes() {
        assert_eq!(seconds(90.0).display_in::<Minute>().to_string(), "1.5 min");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_hours(h in -1e6..1e6f64) {
            let back = hours(h).value_in::<Hour>();
            prop_assert!((back - h).abs() <= 1e-12 * h.abs().max(1.0));
        }
    }
}
