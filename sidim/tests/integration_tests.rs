//! Integration-level tests for the `sidim` facade crate.

use sidim::typenum::{P2, P3};
use sidim::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Algebra scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn length_times_length_is_area() {
    let a: Area = Length::new(5.0) * Length::new(5.0);
    assert_eq!(a.value(), 25.0);
    assert_eq!(a.exponents(), [0, 2, 0, 0, 0, 0, 0]);
}

#[test]
fn length_over_time_is_velocity() {
    let v: Velocity = Length::new(10.0) / Time::new(2.0);
    assert_eq!(v.value(), 5.0);
}

#[test]
fn force_times_length_is_energy() {
    let e: Energy = Force::new(10.0) * Length::new(3.0);
    assert_eq!(e.value(), 30.0);
}

#[test]
fn kinetic_energy() {
    let m = kilograms(2.0);
    let v: Velocity = qty!(3 m) / qty!(1 s);
    let e: Energy = m * v.powi::<P2>() * 0.5;
    assert_eq!(e.value(), 9.0);
}

#[test]
fn pendulum_length_from_period() {
    // L = g T² / 4π²
    let g: Acceleration = Length::new(9.806_65) / (qty!(1 s) * qty!(1 s));
    let period = seconds(2.0);
    let l: Length = g * pow::<P2, _>(period) / (4.0 * core::f64::consts::PI * core::f64::consts::PI);
    assert_relative_eq!(l.value(), 0.993_621_1, max_relative = 1e-6);
}

#[test]
fn cube_side_from_volume() {
    let side = centimeters(10.0);
    let v: Volume = pow::<P3, _>(side);
    assert_relative_eq!(v.value_in::<Liter>(), 1.0, max_relative = 1e-12);
    let face: Area = side * side;
    assert_relative_eq!(sqrt(face).value(), 0.1, max_relative = 1e-12);
}

#[test]
fn electrical_power() {
    let i = qty!(2 A);
    let r = ohms(50.0);
    let u: Voltage = i * r;
    let p: Power = u * i;
    assert_eq!(p.value(), 200.0);
    assert_relative_eq!(p.value_in::<Kilowatt>(), 0.2, max_relative = 1e-12);
}

#[test]
fn ideal_gas_pressure() {
    let n = moles(1.0);
    let t = qty!(0 degC);
    let v = liters(22.413_969_54);
    let p: Pressure = n * constants::MOLAR_GAS * t / v;
    assert_relative_eq!(p.value_in::<Atmosphere>(), 1.0, max_relative = 1e-6);
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit literals
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn kilocalorie_is_4184_joules() {
    assert_eq!(qty!(1 kcal).value(), 4184.0);
    assert_eq!(kilocalories(1.0).value_in::<Joule>(), 4184.0);
}

#[test]
fn zero_celsius_is_273_15_kelvin() {
    assert_eq!(qty!(0 degC).value(), 273.15);
    assert_eq!(degrees_celsius(0.0).value_in::<Kelvin>(), 273.15);
}

#[test]
fn atmosphere_is_101325_pascal() {
    assert_eq!(qty!(1 atm).value(), 101_325.0);
}

#[test]
fn kilometer_equals_thousand_meters_exactly() {
    assert!(qty!(1 km) == qty!(1000 m));
    assert_eq!(qty!(1 km).value(), 1000.0);
}

#[test]
fn inch_literal() {
    assert_abs_diff_eq!(qty!(12 in).value_in::<Foot>(), 1.0, epsilon = 1e-12);
}

#[test]
fn negative_affine_literal_negates_after_conversion() {
    assert_abs_diff_eq!(qty!(-10 degC).value(), -283.15, epsilon = 1e-9);
    assert_abs_diff_eq!(degrees_celsius(-10.0).value(), 263.15, epsilon = 1e-9);
}

#[test]
fn literal_and_constructor_agree() {
    assert_eq!(qty!(3 MeV), mega_electron_volts(3.0));
    assert_eq!(qty!(2.5 hr), hours(2.5));
    assert_eq!(qty!(7 uF), microfarads(7.0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dimensionless_renders_as_one() {
    assert_eq!(Dimensionless::new(0.5).to_string(), "0.5 [1]");
    assert_eq!(Dimensionless::new(1.0).dimension().to_string(), "1");
}

#[test]
fn velocity_renders_negative_exponent() {
    let s = Velocity::new(1.0).dimension().to_string();
    assert!(s.contains("^-1"));
    assert_eq!(s, "m·s^-1");
}

#[test]
fn unit_exponents_never_render_power_one() {
    for s in [
        Force::new(1.0).dimension().to_string(),
        Charge::new(1.0).dimension().to_string(),
        MolarMass::new(1.0).dimension().to_string(),
    ] {
        assert!(!s.contains("^1"), "{s}");
    }
    assert_eq!(Force::new(1.0).dimension().to_string(), "kg·m·s^-2");
}

#[test]
fn display_in_units() {
    assert_eq!(format!("{:.1}", qty!(100 km).display_in::<Mile>()), "62.1 mi");
    assert_eq!(qty!(300 K).display_in::<DegreeCelsius>().to_string(), format!("{} °C", 300.0 - 273.15));
}

// ─────────────────────────────────────────────────────────────────────────────
// IEEE edge cases
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn nan_quantity_is_not_equal_to_itself() {
    let q = Length::NAN;
    assert!(q != q);
    assert!(q.partial_cmp(&q).is_none());
}

#[test]
fn signed_zeros_compare_equal() {
    assert!(Length::new(0.0) == Length::new(-0.0));
}

#[test]
fn division_by_zero_quantity() {
    let v: Velocity = Length::new(-1.0) / Time::new(0.0);
    assert_eq!(v.value(), f64::NEG_INFINITY);
    let r: Dimensionless = Length::new(0.0) / Length::new(0.0);
    assert!(r.value().is_nan());
}

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn photon_energy_in_electron_volts() {
    let lambda = Length::new(500e-9);
    let e: Energy = constants::PLANCK * constants::SPEED_OF_LIGHT / lambda;
    assert_relative_eq!(e.value_in::<ElectronVolt>(), 2.479_683_969, max_relative = 1e-8);
}

#[test]
fn constants_are_const_items() {
    const LIGHT_SECOND: Length = Length::new(constants::SPEED_OF_LIGHT.value());
    assert_eq!(LIGHT_SECOND.value(), 299_792_458.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-based tests
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_abs_is_symmetric(x in -1e12..1e12f64) {
        let a = Length::new(-x).abs();
        let b = Length::new(x).abs();
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.value(), x.abs());
    }

    #[test]
    fn prop_sqrt_of_square_is_abs(x in -1e100..1e100f64) {
        let back: Time = sqrt(pow::<P2, _>(Time::new(x)));
        prop_assert!((back.value() - x.abs()).abs() <= 1e-15 * x.abs());
    }

    #[test]
    fn prop_add_then_sub_is_identity(a in -1e6..1e6f64, b in -1e6..1e6f64) {
        let r = (Energy::new(a) + Energy::new(b)) - Energy::new(b);
        prop_assert!((r.value() - a).abs() <= 1e-9);
    }

    #[test]
    fn prop_mul_div_roundtrip(a in 1e-6..1e6f64, b in 1e-6..1e6f64) {
        let p: Momentum = Mass::new(a) * Velocity::new(b);
        let m: Mass = p / Velocity::new(b);
        prop_assert!((m.value() - a).abs() <= 1e-12 * a);
    }
}
