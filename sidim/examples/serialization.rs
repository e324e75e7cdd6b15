//! Serialize quantities with serde.
//!
//! By default a `Quantity<D>` is written as its bare SI magnitude. Fields tagged with
//! `#[serde(with = "sidim::serde_with_dimension")]` also carry the dimension string, which is checked on the way back.
//!
//! Run with: `cargo run --example serialization --features serde`

use serde::{Deserialize, Serialize};
use sidim::{degrees_celsius, kilometers, qty, Length, Pressure, Temperature, Velocity};

#[derive(Debug, Serialize, Deserialize)]
struct Reading {
    station: String,
    altitude: Length,
    #[serde(with = "sidim::serde_with_dimension")]
    temperature: Temperature,
    #[serde(with = "sidim::serde_with_dimension")]
    pressure: Pressure,
    #[serde(with = "sidim::serde_with_dimension")]
    wind: Velocity,
}

fn main() -> Result<(), serde_json::Error> {
    let reading = Reading {
        station: "summit".to_owned(),
        altitude: kilometers(4.2),
        temperature: degrees_celsius(-3.5),
        pressure: qty!(61.6 kPa),
        wind: Velocity::new(12.0),
    };

    let json = serde_json::to_string_pretty(&reading)?;
    println!("{json}");

    let back: Reading = serde_json::from_str(&json)?;
    println!("{} at {}: {} / {} / {}", back.station, back.altitude, back.temperature, back.pressure, back.wind);

    let bare = serde_json::to_string(&reading.altitude)?;
    let altitude: Length = serde_json::from_str(&bare)?;
    assert_eq!(altitude, reading.altitude);

    let wrong = r#"{"station":"x","altitude":1.0,
        "temperature":{"value":1.0,"dimension":"m"},
        "pressure":{"value":1.0,"dimension":"kg·m^-1·s^-2"},
        "wind":{"value":1.0,"dimension":"m·s^-1"}}"#;
    match serde_json::from_str::<Reading>(wrong) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
