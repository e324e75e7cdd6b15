//! Radioactivity and dose units.
//!
//! The becquerel shares the dimension of the hertz and the sievert shares that of the gray; the type system does
//! not tell them apart.

use crate::kinds::{AbsorbedDoseDim, RadioactiveActivityDim};

define_unit! {
    /// Becquerel, one decay per second.
    Becquerel, "Bq", RadioactiveActivityDim, 1.0 => becquerels
}

define_unit! {
    /// Curie (`3.7e10 Bq`).
    Curie, "Ci", RadioactiveActivityDim, 3.7e10 => curies
}

define_unit! {
    /// Gray, one joule absorbed per kilogram.
    Gray, "Gy", AbsorbedDoseDim, 1.0 => grays
}

define_unit! {
    /// Sievert, equivalent dose.
    Sievert, "Sv", AbsorbedDoseDim, 1.0 => sieverts
}
