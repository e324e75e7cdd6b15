//! Named physical kinds.
//!
//! Each kind is a dimension alias (`VelocityDim`) plus a quantity alias (`Velocity = Quantity<VelocityDim>`). Kinds
//! are conveniences only: the result of any operator is the same type as the matching named kind, so
//! `Length / Time` *is* a [`Velocity`].
//!
//! Exponents are listed in slot order: mass, length, time, current, temperature, amount, luminosity.

use crate::dimension::Dim;
use crate::quantity::Quantity;
use typenum::{N1, N2, N3, N4, P1, P2, P3, P4, Z0};

macro_rules! kinds {
    ($(
        $(#[$attr:meta])*
        $dim:ident, $qty:ident = [$m:ty, $l:ty, $t:ty, $i:ty, $th:ty, $n:ty, $j:ty];
    )*) => {
        $(
            $(#[$attr])*
            pub type $dim = Dim<$m, $l, $t, $i, $th, $n, $j>;

            #[doc = concat!("A quantity with dimension [`", stringify!($dim), "`].")]
            pub type $qty = Quantity<$dim>;
        )*
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Base quantities
// ─────────────────────────────────────────────────────────────────────────────

kinds! {
    /// Pure number (`1`).
    DimensionlessDim, Dimensionless = [Z0, Z0, Z0, Z0, Z0, Z0, Z0];
    /// Mass (`kg`).
    MassDim, Mass = [P1, Z0, Z0, Z0, Z0, Z0, Z0];
    /// Length (`m`).
    LengthDim, Length = [Z0, P1, Z0, Z0, Z0, Z0, Z0];
    /// Time (`s`).
    TimeDim, Time = [Z0, Z0, P1, Z0, Z0, Z0, Z0];
    /// Electric current (`A`).
    CurrentDim, Current = [Z0, Z0, Z0, P1, Z0, Z0, Z0];
    /// Thermodynamic temperature (`K`).
    TemperatureDim, Temperature = [Z0, Z0, Z0, Z0, P1, Z0, Z0];
    /// Amount of substance (`mol`).
    AmountDim, Amount = [Z0, Z0, Z0, Z0, Z0, P1, Z0];
    /// Luminous intensity (`cd`).
    LuminosityDim, Luminosity = [Z0, Z0, Z0, Z0, Z0, Z0, P1];
}

// ─────────────────────────────────────────────────────────────────────────────
// Mechanics
// ─────────────────────────────────────────────────────────────────────────────

kinds! {
    /// Area (`m^2`).
    AreaDim, Area = [Z0, P2, Z0, Z0, Z0, Z0, Z0];
    /// Volume (`m^3`).
    VolumeDim, Volume = [Z0, P3, Z0, Z0, Z0, Z0, Z0];
    /// Velocity (`m·s^-1`).
    VelocityDim, Velocity = [Z0, P1, N1, Z0, Z0, Z0, Z0];
    /// Acceleration (`m·s^-2`).
    AccelerationDim, Acceleration = [Z0, P1, N2, Z0, Z0, Z0, Z0];
    /// Momentum (`kg·m·s^-1`).
    MomentumDim, Momentum = [P1, P1, N1, Z0, Z0, Z0, Z0];
    /// Force, newton (`kg·m·s^-2`).
    ForceDim, Force = [P1, P1, N2, Z0, Z0, Z0, Z0];
    /// Energy, joule (`kg·m^2·s^-2`).
    EnergyDim, Energy = [P1, P2, N2, Z0, Z0, Z0, Z0];
    /// Power, watt (`kg·m^2·s^-3`).
    PowerDim, Power = [P1, P2, N3, Z0, Z0, Z0, Z0];
    /// Pressure, pascal (`kg·m^-1·s^-2`).
    PressureDim, Pressure = [P1, N1, N2, Z0, Z0, Z0, Z0];
    /// Frequency, hertz (`s^-1`).
    FrequencyDim, Frequency = [Z0, Z0, N1, Z0, Z0, Z0, Z0];
    /// Mass density (`kg·m^-3`).
    DensityDim, Density = [P1, N3, Z0, Z0, Z0, Z0, Z0];
    /// Dynamic viscosity (`kg·m^-1·s^-1`).
    DynamicViscosityDim, DynamicViscosity = [P1, N1, N1, Z0, Z0, Z0, Z0];
    /// Kinematic viscosity (`m^2·s^-1`).
    KinematicViscosityDim, KinematicViscosity = [Z0, P2, N1, Z0, Z0, Z0, Z0];
    /// Action, energy times time (`kg·m^2·s^-1`).
    ActionDim, Action = [P1, P2, N1, Z0, Z0, Z0, Z0];
}

// ─────────────────────────────────────────────────────────────────────────────
// Electromagnetism
// ─────────────────────────────────────────────────────────────────────────────

kinds! {
    /// Electric charge, coulomb (`s·A`).
    ChargeDim, Charge = [Z0, Z0, P1, P1, Z0, Z0, Z0];
    /// Electric potential, volt (`kg·m^2·s^-3·A^-1`).
    VoltageDim, Voltage = [P1, P2, N3, N1, Z0, Z0, Z0];
    /// Electric resistance, ohm (`kg·m^2·s^-3·A^-2`).
    ResistanceDim, Resistance = [P1, P2, N3, N2, Z0, Z0, Z0];
    /// Capacitance, farad (`kg^-1·m^-2·s^4·A^2`).
    CapacitanceDim, Capacitance = [N1, N2, P4, P2, Z0, Z0, Z0];
    /// Inductance, henry (`kg·m^2·s^-2·A^-2`).
    InductanceDim, Inductance = [P1, P2, N2, N2, Z0, Z0, Z0];
    /// Magnetic flux, weber (`kg·m^2·s^-2·A^-1`).
    MagneticFluxDim, MagneticFlux = [P1, P2, N2, N1, Z0, Z0, Z0];
    /// Magnetic flux density, tesla (`kg·s^-2·A^-1`).
    MagneticFieldDim, MagneticField = [P1, Z0, N2, N1, Z0, Z0, Z0];
    /// Electric conductance, siemens (`kg^-1·m^-2·s^3·A^2`).
    ConductanceDim, Conductance = [N1, N2, P3, P2, Z0, Z0, Z0];
    /// Electric field strength (`kg·m·s^-3·A^-1`).
    ElectricFieldDim, ElectricField = [P1, P1, N3, N1, Z0, Z0, Z0];
}

// ─────────────────────────────────────────────────────────────────────────────
// Thermodynamics and chemistry
// ─────────────────────────────────────────────────────────────────────────────

kinds! {
    /// Entropy and heat capacity (`kg·m^2·s^-2·K^-1`).
    EntropyDim, Entropy = [P1, P2, N2, Z0, N1, Z0, Z0];
    /// Specific heat capacity (`m^2·s^-2·K^-1`).
    SpecificHeatDim, SpecificHeat = [Z0, P2, N2, Z0, N1, Z0, Z0];
    /// Thermal conductivity (`kg·m·s^-3·K^-1`).
    ThermalConductivityDim, ThermalConductivity = [P1, P1, N3, Z0, N1, Z0, Z0];
    /// Molar mass (`kg·mol^-1`).
    MolarMassDim, MolarMass = [P1, Z0, Z0, Z0, Z0, N1, Z0];
    /// Amount concentration (`m^-3·mol`).
    ConcentrationDim, Concentration = [Z0, N3, Z0, Z0, Z0, P1, Z0];
    /// Catalytic activity, katal (`s^-1·mol`).
    CatalyticActivityDim, CatalyticActivity = [Z0, Z0, N1, Z0, Z0, P1, Z0];
    /// Molar energy (`kg·m^2·s^-2·mol^-1`).
    MolarEnergyDim, MolarEnergy = [P1, P2, N2, Z0, Z0, N1, Z0];
    /// Molar entropy, the dimension of the gas constant (`kg·m^2·s^-2·K^-1·mol^-1`).
    MolarEntropyDim, MolarEntropy = [P1, P2, N2, Z0, N1, N1, Z0];
}

// ─────────────────────────────────────────────────────────────────────────────
// Radiation and photometry
// ─────────────────────────────────────────────────────────────────────────────

/// Radioactive activity, becquerel. Same dimension as [`FrequencyDim`].
pub type RadioactiveActivityDim = FrequencyDim;
/// A quantity with dimension [`RadioactiveActivityDim`].
pub type RadioactiveActivity = Frequency;

/// Luminous flux, lumen. The steradian is dimensionless, so this is [`LuminosityDim`].
pub type LuminousFluxDim = LuminosityDim;
/// A quantity with dimension [`LuminousFluxDim`].
pub type LuminousFlux = Luminosity;

kinds! {
    /// Absorbed and equivalent dose, gray and sievert (`m^2·s^-2`).
    AbsorbedDoseDim, AbsorbedDose = [Z0, P2, N2, Z0, Z0, Z0, Z0];
    /// Illuminance, lux (`m^-2·cd`).
    IlluminanceDim, Illuminance = [Z0, N2, Z0, Z0, Z0, Z0, P1];
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensions of physical constants
// ─────────────────────────────────────────────────────────────────────────────

kinds! {
    /// Reciprocal amount (`mol^-1`), the dimension of the Avogadro constant.
    InverseAmountDim, InverseAmount = [Z0, Z0, Z0, Z0, Z0, N1, Z0];
    /// Dimension of the gravitational constant (`kg^-1·m^3·s^-2`).
    GravitationalDim, GravitationalCoupling = [N1, P3, N2, Z0, Z0, Z0, Z0];
    /// Dimension of the Stefan–Boltzmann constant (`kg·s^-3·K^-4`).
    StefanBoltzmannDim, RadiantExitanceCoefficient = [P1, Z0, N3, Z0, N4, Z0, Z0];
}
