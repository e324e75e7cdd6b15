//! Dimensional analysis walkthrough with structured logging.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`

use std::env;

use sidim::constants::{BOLTZMANN, ELECTRON_MASS, PLANCK, SPEED_OF_LIGHT};
use sidim::typenum::P2;
use sidim::{
    electron_volts, hours, kilometers, kelvins, qty, ElectronVolt, Energy, Frequency, Length, Time, Velocity,
};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Dimensional analysis");

    let distance: Length = kilometers(120.0);
    let time: Time = hours(1.5);
    let speed: Velocity = distance / time;
    info!(%distance, %time, %speed, "distance / time");
    debug!(dimension = %speed.dimension(), exponents = ?speed.exponents(), "speed is a velocity");

    let ke: Energy = qty!(1200 kg) * speed.powi::<P2>() * 0.5;
    info!(kinetic_energy = %ke.display_in::<sidim::Kilojoule>(), "kinetic energy at that speed");

    info!("Physical constants");

    let rest: Energy = ELECTRON_MASS * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
    info!(rest_energy = %format!("{:.4}", rest.display_in::<sidim::MegaElectronVolt>()), "electron rest energy");

    let thermal: Energy = BOLTZMANN * kelvins(300.0);
    info!(thermal = %format!("{:.4}", thermal.display_in::<ElectronVolt>()), "k_B T at room temperature");

    let photon = electron_volts(2.0);
    let nu: Frequency = photon / PLANCK;
    let wavelength: Length = SPEED_OF_LIGHT / nu;
    debug!(frequency = %format!("{nu:e}"), "photon frequency");
    info!(wavelength_nm = wavelength.value() * 1e9, "2 eV photon");
}
