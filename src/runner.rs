//! Simulation orchestration.
//!
//! [`Simulation`] drives the whole pipeline for one run: validate the raw
//! operator input, convert units, derive the Doppler beat frequency,
//! synthesize each vehicle, mix, and normalize. Raw numeric fields arrive as
//! text exactly as an entry widget would deliver them; everything is parsed
//! and validated here so the synthesis stages only ever see finite numbers.

use crate::band::Band;
use crate::buffer::SampleBuffer;
use crate::direction::Direction;
use crate::doppler::beat_frequency;
use crate::error::SimulationError;
use crate::mixer::mix;
use crate::tone;
use crate::units::UnitSystem;

/// Amplitude used when the operator cannot enter one (single-vehicle mode).
const DEFAULT_AMPLITUDE: f64 = 1.0;

/// Outcome of a simulation run: a ready-to-play buffer or the error that
/// aborted the run.
pub type SimulationResult<const SAMPLE_RATE: u32> =
    Result<SampleBuffer<SAMPLE_RATE>, SimulationError>;

/// One vehicle's worth of raw operator input for a multi-vehicle run.
///
/// Speed and amplitude stay as the text the operator typed; they are parsed
/// when the run executes. A vehicle whose fields are not all filled in is
/// skipped by [`Simulation::run_multi`] rather than reported as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// Speed entry text, in the run's unit system
    pub speed: String,
    /// Direction of travel
    pub direction: Direction,
    /// Amplitude entry text (relative loudness of this vehicle's echo)
    pub amplitude: String,
}

impl Vehicle {
    /// Creates a vehicle entry from raw field values.
    pub fn new(
        speed: impl Into<String>,
        direction: Direction,
        amplitude: impl Into<String>,
    ) -> Self {
        Self {
            speed: speed.into(),
            direction,
            amplitude: amplitude.into(),
        }
    }

    /// An empty entry, like an untouched row of the input form.
    pub fn unspecified() -> Self {
        Self::new("", Direction::Unspecified, "")
    }

    /// Whether all three fields are present and non-blank.
    ///
    /// Only fully specified vehicles take part in a multi-vehicle run;
    /// whether their field *contents* are valid is decided later, during
    /// the run itself.
    pub fn is_fully_specified(&self) -> bool {
        !self.speed.trim().is_empty()
            && self.direction.is_specified()
            && !self.amplitude.trim().is_empty()
    }
}

/// A configured simulation: the selected transmit band and unit system.
///
/// The sample rate is part of the type; one `Simulation` value produces
/// buffers of exactly one rate. `band` is optional because the operator may
/// not have selected one; running in that state fails with
/// [`SimulationError::TransmitFrequency`].
///
/// # Examples
///
/// ```
/// use radartone::{Band, Direction, Simulation, UnitSystem, Vehicle};
///
/// let sim = Simulation::<44100>::new(Some(Band::Ka), UnitSystem::Metric);
///
/// let vehicles = [
///     Vehicle::new("100", Direction::Approaching, "1.0"),
///     Vehicle::new("60", Direction::Receding, "0.4"),
///     Vehicle::unspecified(), // untouched row, silently skipped
/// ];
/// let buffer = sim.run_multi(&vehicles, "0.5").unwrap();
/// assert_eq!(buffer.len(), 22_050);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulation<const SAMPLE_RATE: u32> {
    band: Option<Band>,
    units: UnitSystem,
}

impl<const SAMPLE_RATE: u32> Simulation<SAMPLE_RATE> {
    /// Creates a simulation for the given band selection and unit system.
    pub fn new(band: Option<Band>, units: UnitSystem) -> Self {
        Self { band, units }
    }

    /// The selected transmit band, if any.
    pub fn band(&self) -> Option<Band> {
        self.band
    }

    /// The unit system speeds are entered in.
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Runs a single-vehicle simulation and returns the normalized buffer.
    ///
    /// The vehicle's amplitude defaults to 1.0; with only one echo in the
    /// mix there is nothing for a relative amplitude to balance against.
    /// Mixing is skipped and the synthesized buffer is normalized directly.
    ///
    /// # Errors
    ///
    /// * [`SimulationError::Direction`] - no direction selected
    /// * [`SimulationError::Conversion`] - speed or duration is not a
    ///   finite real number
    /// * [`SimulationError::TransmitFrequency`] - no band selected
    pub fn run_single(
        &self,
        speed: &str,
        direction: Direction,
        duration: &str,
    ) -> SimulationResult<SAMPLE_RATE> {
        let mut buffer = self.vehicle_signal(speed, direction, duration, None)?;
        buffer.normalize();
        Ok(buffer)
    }

    /// Runs a multi-vehicle simulation and returns the normalized composite.
    ///
    /// Vehicles that are not fully specified (blank speed or amplitude, or
    /// no direction) are silently dropped, mirroring a half-filled input
    /// form; they are not an error. If no vehicle survives the filter the
    /// run fails with [`SimulationError::NoData`]. The retained vehicles are
    /// synthesized in order with the shared `duration`; the first synthesis
    /// error aborts the whole run and discards any buffers already produced,
    /// so partial audio never reaches playback.
    ///
    /// # Errors
    ///
    /// * [`SimulationError::NoData`] - no vehicle was fully specified
    /// * any per-vehicle error from the first failing vehicle, see
    ///   [`run_single`](Self::run_single)
    pub fn run_multi(&self, vehicles: &[Vehicle], duration: &str) -> SimulationResult<SAMPLE_RATE> {
        let retained: Vec<&Vehicle> = vehicles
            .iter()
            .filter(|vehicle| vehicle.is_fully_specified())
            .collect();
        if retained.is_empty() {
            return Err(SimulationError::NoData);
        }

        let mut signals = Vec::with_capacity(retained.len());
        for vehicle in retained {
            signals.push(self.vehicle_signal(
                &vehicle.speed,
                vehicle.direction,
                duration,
                Some(&vehicle.amplitude),
            )?);
        }

        let mut composite = mix(signals)?;
        composite.normalize();
        Ok(composite)
    }

    /// Validates one vehicle's input and synthesizes its echo.
    ///
    /// Checks run in a fixed order: direction first, then the numeric
    /// fields, then the band. When several inputs are bad at once, the
    /// reported error is always the earliest in that order.
    fn vehicle_signal(
        &self,
        speed: &str,
        direction: Direction,
        duration: &str,
        amplitude: Option<&str>,
    ) -> SimulationResult<SAMPLE_RATE> {
        direction.phase_offset()?;

        let speed = parse_field(speed)?;
        let duration = parse_field(duration)?;
        let amplitude = match amplitude {
            Some(text) => parse_field(text)?,
            None => DEFAULT_AMPLITUDE,
        };

        let band = self.band.ok_or(SimulationError::TransmitFrequency)?;
        let velocity = self.units.to_meters_per_second(speed);
        let beat = beat_frequency(band.carrier_hz(), velocity);

        tone::synthesize(beat, direction, duration, amplitude)
    }
}

/// Parses a raw numeric entry as a finite real number.
///
/// Empty text, non-numeric text, and non-finite values ("inf", "NaN") all
/// report the same conversion error; to the operator they are one and the
/// same unusable field.
fn parse_field(text: &str) -> Result<f64, SimulationError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(SimulationError::Conversion)
}
