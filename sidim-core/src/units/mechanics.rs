//! Units of mechanics: velocity, force, energy, power, pressure and frequency.
//!
//! Canonical units are the coherent SI ones: metre per second, newton, joule, watt, pascal and hertz, each with
//! `SCALE == 1.0`.
//!
//! ```rust
//! use sidim_core::units::mechanics::{kilocalories, Joule, KilowattHour};
//!
//! let e = kilocalories(860.42);
//! assert_eq!(kilocalories(1.0).value_in::<Joule>(), 4184.0);
//! assert!((e.value_in::<KilowattHour>() - 1.0).abs() < 1e-4);
//! ```

use crate::kinds::{EnergyDim, ForceDim, FrequencyDim, PowerDim, PressureDim, VelocityDim};

// ─────────────────────────────────────────────────────────────────────────────
// Velocity
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Knot, one nautical mile per hour.
    Knot, "kn", VelocityDim, 1852.0 / 3600.0 => knots
}

// ─────────────────────────────────────────────────────────────────────────────
// Force
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Newton (`kg·m·s⁻²`).
    Newton, "N", ForceDim, 1.0 => newtons
}

define_unit! {
    /// Kilonewton (`1e3 N`).
    Kilonewton, "kN", ForceDim, 1e3 => kilonewtons
}

define_unit! {
    /// Pound-force, the weight of one pound under standard gravity.
    PoundForce, "lbf", ForceDim, 4.448_221_615_260_5 => pounds_force
}

// ─────────────────────────────────────────────────────────────────────────────
// Energy
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Joule (`N·m`).
    Joule, "J", EnergyDim, 1.0 => joules
}

define_unit! {
    /// Kilojoule (`1e3 J`).
    Kilojoule, "kJ", EnergyDim, 1e3 => kilojoules
}

define_unit! {
    /// Thermochemical calorie (`4.184 J`).
    Calorie, "cal", EnergyDim, 4.184 => calories
}

define_unit! {
    /// Kilocalorie (`4184 J`).
    Kilocalorie, "kcal", EnergyDim, 4184.0 => kilocalories
}

define_unit! {
    /// Electronvolt (exact since the 2019 SI redefinition).
    ElectronVolt, "eV", EnergyDim, 1.602_176_634e-19 => electron_volts
}

define_unit! {
    /// Millielectronvolt (`1e-3 eV`).
    MilliElectronVolt, "meV", EnergyDim, 1.602_176_634e-22 => milli_electron_volts
}

define_unit! {
    /// Megaelectronvolt (`1e6 eV`).
    MegaElectronVolt, "MeV", EnergyDim, 1.602_176_634e-13 => mega_electron_volts
}

define_unit! {
    /// Gigaelectronvolt (`1e9 eV`).
    GigaElectronVolt, "GeV", EnergyDim, 1.602_176_634e-10 => giga_electron_volts
}

define_unit! {
    /// Watt-hour (`3600 J`).
    WattHour, "Wh", EnergyDim, 3_600.0 => watt_hours
}

define_unit! {
    /// Kilowatt-hour (`3.6e6 J`).
    KilowattHour, "kWh", EnergyDim, 3.6e6 => kilowatt_hours
}

define_unit! {
    /// International Table British thermal unit.
    BritishThermalUnit, "BTU", EnergyDim, 1_055.055_852_62 => british_thermal_units
}

// ─────────────────────────────────────────────────────────────────────────────
// Power
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Watt (`J·s⁻¹`).
    Watt, "W", PowerDim, 1.0 => watts
}

define_unit! {
    /// Kilowatt (`1e3 W`).
    Kilowatt, "kW", PowerDim, 1e3 => kilowatts
}

define_unit! {
    /// Megawatt (`1e6 W`).
    Megawatt, "MW", PowerDim, 1e6 => megawatts
}

define_unit! {
    /// Mechanical horsepower (`550 ft·lbf/s`).
    Horsepower, "hp", PowerDim, 745.699_871_582_270_22 => horsepower
}

// ─────────────────────────────────────────────────────────────────────────────
// Pressure
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Pascal (`N·m⁻²`).
    Pascal, "Pa", PressureDim, 1.0 => pascals
}

define_unit! {
    /// Kilopascal (`1e3 Pa`).
    Kilopascal, "kPa", PressureDim, 1e3 => kilopascals
}

define_unit! {
    /// Megapascal (`1e6 Pa`).
    Megapascal, "MPa", PressureDim, 1e6 => megapascals
}

define_unit! {
    /// Bar (`1e5 Pa`).
    Bar, "bar", PressureDim, 1e5 => bars
}

define_unit! {
    /// Standard atmosphere (`101325 Pa`).
    Atmosphere, "atm", PressureDim, 101_325.0 => atmospheres
}

define_unit! {
    /// Pound-force per square inch.
    PoundPerSquareInch, "psi", PressureDim, 6_894.757_293_168 => psi
}

define_unit! {
    /// Torr (`1/760 atm`).
    Torr, "Torr", PressureDim, 101_325.0 / 760.0 => torr
}

define_unit! {
    /// Conventional millimetre of mercury.
    MillimeterOfMercury, "mmHg", PressureDim, 133.322_387_415 => millimeters_of_mercury
}

// ─────────────────────────────────────────────────────────────────────────────
// Frequency
// ─────────────────────────────────────────────────────────────────────────────

define_unit! {
    /// Hertz (`s⁻¹`).
    Hertz, "Hz", FrequencyDim, 1.0 => hertz
}

define_unit! {
    /// Kilohertz (`1e3 Hz`).
    Kilohertz, "kHz", FrequencyDim, 1e3 => kilohertz
}

define_unit! {
    /// Megahertz (`1e6 Hz`).
    Megahertz, "MHz", FrequencyDim, 1e6 => megahertz
}

define_unit! {
    /// Gigahertz (`1e9 Hz`).
    Gigahertz, "GHz", FrequencyDim, 1e9 => gigahertz
}
