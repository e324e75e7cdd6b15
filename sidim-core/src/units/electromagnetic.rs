//! Electromagnetic units.
//!
//! Canonical units are the coherent SI ones (ampere, coulomb, volt, ohm, siemens, farad, henry, weber, tesla).
//! Only the prefixes in common circuit use are provided.
//!
//! ```rust
//! use sidim_core::kinds::Voltage;
//! use sidim_core::units::electromagnetic::{kiloohms, milliamperes, Volt};
//!
//! let v: Voltage = milliamperes(2.0) * kiloohms(4.7);
//! assert!((v.value_in::<Volt>() - 9.4).abs() < 1e-12);
//! ```

use crate::kinds::{
    CapacitanceDim, ChargeDim, ConductanceDim, CurrentDim, InductanceDim, MagneticFieldDim, MagneticFluxDim,
    ResistanceDim, VoltageDim,
};

// ─────────────────────────────────────────────────────────────────────────────
// Current
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Ampere (SI base unit).
    Ampere, "A", CurrentDim, 1.0 => amperes
}

define_unit! {
    /// Milliampere (`1e-3 A`).
    Milliampere, "mA", CurrentDim, 1e-3 => milliamperes
}

define_unit! {
    /// Microampere (`1e-6 A`).
    Microampere, "µA", CurrentDim, 1e-6 => microamperes
}

define_unit! {
    /// Nanoampere (`1e-9 A`).
    Nanoampere, "nA", CurrentDim, 1e-9 => nanoamperes
}

// ─────────────────────────────────────────────────────────────────────────────
// Charge
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Coulomb (`A·s`).
    Coulomb, "C", ChargeDim, 1.0 => coulombs
}

define_unit! {
    /// Millicoulomb (`1e-3 C`).
    Millicoulomb, "mC", ChargeDim, 1e-3 => millicoulombs
}

define_unit! {
    /// Microcoulomb (`1e-6 C`).
    Microcoulomb, "µC", ChargeDim, 1e-6 => microcoulombs
}

define_unit! {
    /// Nanocoulomb (`1e-9 C`).
    Nanocoulomb, "nC", ChargeDim, 1e-9 => nanocoulombs
}

define_unit! {
    /// Picocoulomb (`1e-12 C`).
    Picocoulomb, "pC", ChargeDim, 1e-12 => picocoulombs
}

// ─────────────────────────────────────────────────────────────────────────────
// Voltage
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Volt (`W·A⁻¹`).
    Volt, "V", VoltageDim, 1.0 => volts
}

define_unit! {
    /// Megavolt (`1e6 V`).
    Megavolt, "MV", VoltageDim, 1e6 => megavolts
}

define_unit! {
    /// Kilovolt (`1e3 V`).
    Kilovolt, "kV", VoltageDim, 1e3 => kilovolts
}

define_unit! {
    /// Millivolt (`1e-3 V`).
    Millivolt, "mV", VoltageDim, 1e-3 => millivolts
}

define_unit! {
    /// Microvolt (`1e-6 V`).
    Microvolt, "µV", VoltageDim, 1e-6 => microvolts
}

// ─────────────────────────────────────────────────────────────────────────────
// Resistance and conductance
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Ohm (`V·A⁻¹`).
    Ohm, "Ω", ResistanceDim, 1.0 => ohms
}

define_unit! {
    /// Megaohm (`1e6 Ω`).
    Megaohm, "MΩ", ResistanceDim, 1e6 => megaohms
}

define_unit! {
    /// Kiloohm (`1e3 Ω`).
    Kiloohm, "kΩ", ResistanceDim, 1e3 => kiloohms
}

define_unit! {
    /// Milliohm (`1e-3 Ω`).
    Milliohm, "mΩ", ResistanceDim, 1e-3 => milliohms
}

define_unit! {
    /// Siemens (`Ω⁻¹`).
    Siemens, "S", ConductanceDim, 1.0 => siemens
}

// ─────────────────────────────────────────────────────────────────────────────
// Capacitance
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Farad (`C·V⁻¹`).
    Farad, "F", CapacitanceDim, 1.0 => farads
}

define_unit! {
    /// Millifarad (`1e-3 F`).
    Millifarad, "mF", CapacitanceDim, 1e-3 => millifarads
}

define_unit! {
    /// Microfarad (`1e-6 F`).
    Microfarad, "µF", CapacitanceDim, 1e-6 => microfarads
}

define_unit! {
    /// Nanofarad (`1e-9 F`).
    Nanofarad, "nF", CapacitanceDim, 1e-9 => nanofarads
}

define_unit! {
    /// Picofarad (`1e-12 F`).
    Picofarad, "pF", CapacitanceDim, 1e-12 => picofarads
}

// ─────────────────────────────────────────────────────────────────────────────
// Inductance and magnetism
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Henry (`Wb·A⁻¹`).
    Henry, "H", InductanceDim, 1.0 => henries
}

define_unit! {
    /// Millihenry (`1e-3 H`).
    Millihenry, "mH", InductanceDim, 1e-3 => millihenries
}

define_unit! {
    /// Microhenry (`1e-6 H`).
    Microhenry, "µH", InductanceDim, 1e-6 => microhenries
}

define_unit! {
    /// Nanohenry (`1e-9 H`).
    Nanohenry, "nH", InductanceDim, 1e-9 => nanohenries
}

define_unit! {
    /// Weber (`V·s`).
    Weber, "Wb", MagneticFluxDim, 1.0 => webers
}

define_unit! {
    /// Tesla (`Wb·m⁻²`).
    Tesla, "T", MagneticFieldDim, 1.0 => teslas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::*;
    use crate::units::length::meters;
    use crate::units::time::{milliseconds, seconds};
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn ohms_law() {
        let i: Current = volts(12.0) / kiloohms(4.0);
        assert_relative_eq!(i.value_in::<Milliampere>(), 3.0, max_relative = 1e-12);
    }

    #[test]
    fn conductance_is_reciprocal_resistance() {
        let g: Conductance = Dimensionless::new(1.0) / milliohms(4.0);
        assert_relative_eq!(g.value_in::<Siemens>(), 250.0, max_relative = 1e-12);
    }

    #[test]
    fn charge_on_capacitor() {
        let q: Charge = microfarads(10.0) * volts(5.0);
        assert_relative_eq!(q.value_in::<Microcoulomb>(), 50.0, max_relative = 1e-12);
        assert_relative_eq!(q.value_in::<Nanocoulomb>(), 5e4, max_relative = 1e-12);
    }

    #[test]
    fn current_times_time_is_charge() {
        let q: Charge = amperes(2.0) * seconds(3.0);
        assert_eq!(q, coulombs(6.0));
        assert_relative_eq!(picocoulombs(1.0).value(), 1e-12, max_relative = 1e-15);
        assert_relative_eq!(millicoulombs(1.0).value(), 1e-3, max_relative = 1e-15);
    }

    #[test]
    fn rc_time_constant() {
        let tau: Time = kiloohms(10.0) * microfarads(100.0);
        assert_relative_eq!(tau.value(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn flux_and_inductance() {
        let flux: MagneticFlux = millihenries(20.0) * amperes(0.5);
        assert_relative_eq!(flux.value_in::<Weber>(), 0.01, max_relative = 1e-12);
        let b: MagneticField = flux / (meters(0.1) * meters(0.1));
        assert_relative_eq!(b.value_in::<Tesla>(), 1.0, max_relative = 1e-12);
        let emf: Voltage = flux / milliseconds(10.0);
        assert_relative_eq!(emf.value(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn prefix_ladders() {
        assert_relative_eq!(megavolts(1.0).value_in::<Kilovolt>(), 1e3, max_relative = 1e-12);
        assert_relative_eq!(microvolts(1e3).value_in::<Millivolt>(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(megaohms(1.0).value_in::<Ohm>(), 1e6, max_relative = 1e-12);
        assert_relative_eq!(millifarads(1.0).value_in::<Nanofarad>(), 1e6, max_relative = 1e-12);
        assert_relative_eq!(picofarads(1e3).value_in::<Nanofarad>(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(microhenries(1e3).value_in::<Millihenry>(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(nanohenries(1.0).value_in::<Henry>(), 1e-9, max_relative = 1e-12);
        assert_relative_eq!(microamperes(1e3).value_in::<Milliampere>(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(nanoamperes(1.0).value_in::<Ampere>(), 1e-9, max_relative = 1e-12);
    }

    #[test]
    fn symbols() {
        assert_eq!(Ohm::SYMBOL, "Ω");
        assert_eq!(Microfarad::SYMBOL, "µF");
        assert_eq!(format!("{}", kiloohms(2.2).display_in::<Kiloohm>()), "2.2 kΩ");
    }
}
