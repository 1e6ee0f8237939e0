//! Multi-vehicle radar simulation.
//!
//! Synthesizes three vehicles crossing the radar beam at once - two
//! approaching at different speeds and one receding - mixes them into a
//! single echo, and plays the normalized result. The fourth, untouched
//! vehicle slot shows that half-filled entries are skipped rather than
//! refused.

mod common;

use anyhow::Result;
use radartone::{Band, Direction, STANDARD_SAMPLE_RATE, Simulation, UnitSystem, Vehicle};

fn main() -> Result<()> {
    let sim = Simulation::<STANDARD_SAMPLE_RATE>::new(Some(Band::K), UnitSystem::Imperial);

    let vehicles = [
        Vehicle::new("65", Direction::Approaching, "1.0"),
        Vehicle::new("40", Direction::Approaching, "0.6"),
        Vehicle::new("55", Direction::Receding, "0.8"),
        Vehicle::unspecified(),
    ];

    println!("Simulating {} vehicle slots on {}:", vehicles.len(), Band::K);
    for (i, vehicle) in vehicles.iter().enumerate() {
        if vehicle.is_fully_specified() {
            println!(
                "  {}: {} mph, {}, amplitude {}",
                i + 1,
                vehicle.speed,
                vehicle.direction,
                vehicle.amplitude
            );
        } else {
            println!("  {}: (not specified, skipped)", i + 1);
        }
    }

    let buffer = sim
        .run_multi(&vehicles, "3")
        .map_err(|err| anyhow::anyhow!("simulation failed: {}", err))?;

    println!(
        "Playing {:.1} s composite echo ({} samples per channel)...",
        buffer.duration(),
        buffer.len()
    );
    common::play_buffer(&buffer)?;

    Ok(())
}
