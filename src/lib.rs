//! Radartone - Doppler echo synthesis for bench-testing radar speed guns.
//!
//! This library simulates the acoustic output a handheld police-radar unit
//! hears from moving traffic, so radar guns can be exercised without live
//! vehicles. It derives the Doppler-shifted beat frequency for each simulated
//! vehicle, synthesizes a stereo tone whose inter-channel phase encodes the
//! direction of travel, mixes the vehicles together, and peak-normalizes the
//! result for playback.
//!
//! # Examples
//!
//! ```
//! use radartone::{Band, Direction, Simulation, UnitSystem, STANDARD_SAMPLE_RATE};
//!
//! let sim = Simulation::<STANDARD_SAMPLE_RATE>::new(Some(Band::K), UnitSystem::Imperial);
//! let buffer = sim.run_single("60", Direction::Approaching, "1").unwrap();
//!
//! assert_eq!(buffer.len(), 44_100);
//! assert!((buffer.peak() - 1.0).abs() < 1e-9);
//! ```

pub mod band;
pub mod buffer;
pub mod direction;
pub mod doppler;
pub mod error;
pub mod mixer;
pub mod runner;
pub mod tone;
pub mod units;

// Re-export commonly used types at the crate root
pub use band::Band;
pub use buffer::SampleBuffer;
pub use direction::Direction;
pub use doppler::{SPEED_OF_LIGHT, beat_frequency};
pub use error::SimulationError;
pub use mixer::mix;
pub use runner::{Simulation, SimulationResult, Vehicle};
pub use tone::{RIGHT_CHANNEL_GAIN, synthesize};
pub use units::UnitSystem;

/// Sample rate used throughout the simulator unless a caller picks another,
/// in samples per second.
pub const STANDARD_SAMPLE_RATE: u32 = 44_100;
