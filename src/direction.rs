//! Vehicle direction relative to the radar gun.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use crate::error::SimulationError;

/// Which way a simulated vehicle is moving relative to the gun.
///
/// Direction is encoded into the synthesized echo as the phase offset of the
/// right channel: approaching traffic leads by a quarter cycle, receding
/// traffic lags by one. `Unspecified` models an operator who has not picked a
/// direction yet; it can never be synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Moving toward the radar gun
    Approaching,
    /// Moving away from the radar gun
    Receding,
    /// No direction selected yet
    Unspecified,
}

impl Direction {
    /// Returns the right-channel phase offset in radians.
    ///
    /// Approaching maps to `+π/2` and receding to `-π/2`. `Unspecified`
    /// fails with [`SimulationError::Direction`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::f64::consts::FRAC_PI_2;
    /// use radartone::Direction;
    ///
    /// assert_eq!(Direction::Approaching.phase_offset().unwrap(), FRAC_PI_2);
    /// assert_eq!(Direction::Receding.phase_offset().unwrap(), -FRAC_PI_2);
    /// assert!(Direction::Unspecified.phase_offset().is_err());
    /// ```
    pub fn phase_offset(self) -> Result<f64, SimulationError> {
        match self {
            Direction::Approaching => Ok(FRAC_PI_2),
            Direction::Receding => Ok(-FRAC_PI_2),
            Direction::Unspecified => Err(SimulationError::Direction),
        }
    }

    /// Whether the operator has actually chosen a direction.
    pub fn is_specified(self) -> bool {
        self != Direction::Unspecified
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Approaching => write!(f, "approaching"),
            Direction::Receding => write!(f, "receding"),
            Direction::Unspecified => write!(f, "unspecified"),
        }
    }
}
