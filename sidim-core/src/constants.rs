//! Physical constants.
//!
//! Exact values are the 2019 SI defining constants; measured values are CODATA 2018. Every constant is a `const`
//! quantity with its proper dimension, so it takes part in dimensional analysis like any other value.
//!
//! ```rust
//! use sidim_core::constants::{PLANCK, SPEED_OF_LIGHT};
//! use sidim_core::kinds::{Energy, Frequency, Length};
//!
//! // Photon energy at 500 nm.
//! let wavelength = Length::new(500e-9);
//! let nu: Frequency = SPEED_OF_LIGHT / wavelength;
//! let e: Energy = PLANCK * nu;
//! assert!((e.value() - 3.972_891e-19).abs() < 1e-24);
//! ```

use crate::kinds::{
    Action, Charge, Entropy, GravitationalCoupling, InverseAmount, Mass, MolarEntropy, RadiantExitanceCoefficient,
    Velocity,
};

/// Speed of light in vacuum, `c` (exact).
pub const SPEED_OF_LIGHT: Velocity = Velocity::new(299_792_458.0);

/// Planck constant, `h` (exact).
pub const PLANCK: Action = Action::new(6.626_070_15e-34);

/// Reduced Planck constant, `ħ = h / 2π`.
pub const REDUCED_PLANCK: Action = Action::new(1.054_571_817e-34);

/// Elementary charge, `e` (exact).
pub const ELEMENTARY_CHARGE: Charge = Charge::new(1.602_176_634e-19);

/// Boltzmann constant, `k_B` (exact).
pub const BOLTZMANN: Entropy = Entropy::new(1.380_649e-23);

/// Molar gas constant, `R = N_A · k_B`.
pub const MOLAR_GAS: MolarEntropy = MolarEntropy::new(8.314_462_618);

/// Electron rest mass, `m_e`.
pub const ELECTRON_MASS: Mass = Mass::new(9.109_383_701_5e-31);

/// Proton rest mass, `m_p`.
pub const PROTON_MASS: Mass = Mass::new(1.672_621_923_69e-27);

/// Neutron rest mass, `m_n`.
pub const NEUTRON_MASS: Mass = Mass::new(1.674_927_498_04e-27);

/// Newtonian constant of gravitation, `G`.
pub const GRAVITATIONAL: GravitationalCoupling = GravitationalCoupling::new(6.674_30e-11);

/// Avogadro constant, `N_A` (exact).
pub const AVOGADRO: InverseAmount = InverseAmount::new(6.022_140_76e23);

/// Stefan–Boltzmann constant, `σ`.
pub const STEFAN_BOLTZMANN: RadiantExitanceCoefficient = RadiantExitanceCoefficient::new(5.670_374_419e-8);
