//! Minimal end-to-end example: build quantities, let the operators derive their dimensions, read them back in units.

use sidim::typenum::P2;
use sidim::{kilometers, minutes, qty, Area, Energy, Force, Kilowatt, Length, Mile, Power, Time, Velocity};

fn main() {
    let side = Length::new(5.0);
    let a: Area = side * side;
    assert_eq!(a.value(), 25.0);
    println!("area      = {a}");

    let v: Velocity = kilometers(42.195) / minutes(130.0);
    println!("pace      = {v:.3}");

    let distance: Length = v * Time::new(3600.0);
    println!("in 1 hour = {:.2}", distance.display_in::<Mile>());

    let work: Energy = Force::new(10.0) * Length::new(3.0);
    let p: Power = work / qty!(2 ms);
    println!("work      = {work}");
    println!("power     = {:.1}", p.display_in::<Kilowatt>());

    let diagonal = (side.powi::<P2>() + side.powi::<P2>()).sqrt();
    println!("diagonal  = {diagonal:.4}");
}
