//! Error type for simulation runs.

use std::fmt;

/// Why a simulation run was aborted.
///
/// Every variant is terminal for its run: the caller reports the message to
/// the operator and starts a fresh run once the input is corrected. Errors
/// are always returned as values; nothing in the pipeline panics or unwinds
/// across a stage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// A vehicle has no direction selected
    Direction,
    /// Speed, duration, or amplitude is missing or not a finite real number
    Conversion,
    /// No transmit band selected
    TransmitFrequency,
    /// No vehicle in a multi-vehicle run was fully specified
    NoData,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Direction => {
                write!(f, "direction for vehicle not specified")
            }
            SimulationError::Conversion => {
                write!(f, "invalid data for speed, duration, and/or amplitude")
            }
            SimulationError::TransmitFrequency => {
                write!(f, "no transmit frequency was specified")
            }
            SimulationError::NoData => {
                write!(f, "invalid and/or no data was specified for the vehicles")
            }
        }
    }
}

impl std::error::Error for SimulationError {}
