//! Unit-literal suffixes.
//!
//! Each suffix is a type alias for the catalog unit it denotes. [`qty!`](crate::qty) resolves its suffix here, so
//! this module is the single suffix → unit table. Two suffixes may denote the same unit (`Da` and `u`, `lb` and
//! `lbm`).
//!
//! ```rust
//! use sidim_core::suffix::{kcal, J};
//! use sidim_core::Unit;
//!
//! assert_eq!(<kcal as Unit>::SCALE, 4184.0);
//! assert_eq!(<J as Unit>::SYMBOL, "J");
//! ```

#![allow(non_camel_case_types)]

use crate::units::{chemistry, electromagnetic as em, length, mass, mechanics, photometry, radiation, thermal, time};

macro_rules! suffixes {
    ($($suffix:ident => $unit:path),* $(,)?) => {
        $(
            #[doc = concat!("Suffix `", stringify!($suffix), "`: [`", stringify!($unit), "`].")]
            pub type $suffix = $unit;
        )*
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Base quantities
// ─────────────────────────────────────────────────────────────────────────────

suffixes! {
    kg => mass::Kilogram,
    g => mass::Gram,
    mg => mass::Milligram,
    Da => mass::AtomicMassUnit,
    u => mass::AtomicMassUnit,
    tonne => mass::Tonne,
    lb => mass::Pound,
    lbm => mass::Pound,
    oz => mass::Ounce,
    slug => mass::Slug,
}

suffixes! {
    m => length::Meter,
    km => length::Kilometer,
    cm => length::Centimeter,
    mm => length::Millimeter,
    ft => length::Foot,
    yd => length::Yard,
    mi => length::Mile,
    nmi => length::NauticalMile,
    au => length::AstronomicalUnit,
    ly => length::LightYear,
    pc => length::Parsec,
    kpc => length::Kiloparsec,
    Mpc => length::Megaparsec,
}

/// Suffix `in`: [`length::Inch`].
pub type r#in = length::Inch;

suffixes! {
    s => time::Second,
    ms => time::Millisecond,
    us => time::Microsecond,
    min => time::Minute,
    hr => time::Hour,
    day => time::Day,
    yr => time::Year,
}

suffixes! {
    A => em::Ampere,
    mA => em::Milliampere,
    uA => em::Microampere,
    nA => em::Nanoampere,
}

suffixes! {
    K => thermal::Kelvin,
    degC => thermal::DegreeCelsius,
    degF => thermal::DegreeFahrenheit,
}

suffixes! {
    mol => chemistry::Mole,
    mmol => chemistry::Millimole,
    cd => photometry::Candela,
}

// ─────────────────────────────────────────────────────────────────────────────
// Mechanics
// ─────────────────────────────────────────────────────────────────────────────

suffixes! {
    N => mechanics::Newton,
    kN => mechanics::Kilonewton,
    lbf => mechanics::PoundForce,

    J => mechanics::Joule,
    kJ => mechanics::Kilojoule,
    cal => mechanics::Calorie,
    kcal => mechanics::Kilocalorie,
    eV => mechanics::ElectronVolt,
    meV => mechanics::MilliElectronVolt,
    MeV => mechanics::MegaElectronVolt,
    GeV => mechanics::GigaElectronVolt,
    Wh => mechanics::WattHour,
    kWh => mechanics::KilowattHour,
    BTU => mechanics::BritishThermalUnit,

    W => mechanics::Watt,
    kW => mechanics::Kilowatt,
    MW => mechanics::Megawatt,
    hp => mechanics::Horsepower,

    Pa => mechanics::Pascal,
    kPa => mechanics::Kilopascal,
    MPa => mechanics::Megapascal,
    bar => mechanics::Bar,
    atm => mechanics::Atmosphere,
    psi => mechanics::PoundPerSquareInch,
    torr => mechanics::Torr,
    mmHg => mechanics::MillimeterOfMercury,

    Hz => mechanics::Hertz,
    kHz => mechanics::Kilohertz,
    MHz => mechanics::Megahertz,
    GHz => mechanics::Gigahertz,

    kn => mechanics::Knot,
}

suffixes! {
    L => length::Liter,
    mL => length::Milliliter,
    b => length::Barn,
}

// ─────────────────────────────────────────────────────────────────────────────
// Electromagnetism
// ─────────────────────────────────────────────────────────────────────────────

suffixes! {
    MV => em::Megavolt,
    kV => em::Kilovolt,
    V => em::Volt,
    mV => em::Millivolt,
    uV => em::Microvolt,

    C => em::Coulomb,
    mC => em::Millicoulomb,
    uC => em::Microcoulomb,
    nC => em::Nanocoulomb,
    pC => em::Picocoulomb,

    Wb => em::Weber,
    T => em::Tesla,
    H => em::Henry,
    mH => em::Millihenry,
    uH => em::Microhenry,
    nH => em::Nanohenry,

    F => em::Farad,
    mF => em::Millifarad,
    uF => em::Microfarad,
    nF => em::Nanofarad,
    pF => em::Picofarad,

    Mohm => em::Megaohm,
    kohm => em::Kiloohm,
    ohm => em::Ohm,
    mohm => em::Milliohm,
    S => em::Siemens,
}

// ─────────────────────────────────────────────────────────────────────────────
// Radiation and photometry
// ─────────────────────────────────────────────────────────────────────────────

suffixes! {
    Bq => radiation::Becquerel,
    Ci => radiation::Curie,
    Gy => radiation::Gray,
    Sv => radiation::Sievert,
    lm => photometry::Lumen,
    lx => photometry::Lux,
}
