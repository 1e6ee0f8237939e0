//! Transmit-band table for the simulated radar gun.

use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// Radar transmit band.
///
/// Each band carries the fixed carrier frequency a radar gun emits on it.
/// Handheld traffic radar operates on one of three bands; K-band is by far
/// the most common, so it is the default.
///
/// # Examples
///
/// ```
/// use radartone::Band;
///
/// assert_eq!(Band::K.carrier_hz(), 24.150e9);
/// assert_eq!(Band::default(), Band::K);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Band {
    /// K-band, 24.150 GHz; the most common traffic-radar band and the default
    #[default]
    K,
    /// Ka-band, 34.7 GHz
    Ka,
    /// X-band, 10.525 GHz
    X,
}

impl Band {
    /// Returns the carrier frequency for this band in Hz.
    ///
    /// Total over all bands; there is no failure mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use radartone::Band;
    ///
    /// assert_eq!(Band::Ka.carrier_hz(), 34.7e9);
    /// assert_eq!(Band::X.carrier_hz(), 10.525e9);
    /// ```
    pub fn carrier_hz(self) -> f64 {
        match self {
            Band::K => 24.150e9,
            Band::Ka => 34.7e9,
            Band::X => 10.525e9,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::K => write!(f, "K-band"),
            Band::Ka => write!(f, "Ka-band"),
            Band::X => write!(f, "X-band"),
        }
    }
}

impl FromStr for Band {
    type Err = SimulationError;

    /// Parses a band name.
    ///
    /// Accepts `"k"`, `"ka"`, and `"x"` case-insensitively, with an optional
    /// `-band` or `band` suffix. Text naming no band fails with
    /// [`SimulationError::TransmitFrequency`].
    ///
    /// # Examples
    ///
    /// ```
    /// use radartone::Band;
    ///
    /// assert_eq!("ka".parse::<Band>().unwrap(), Band::Ka);
    /// assert_eq!("K-band".parse::<Band>().unwrap(), Band::K);
    /// assert!("q".parse::<Band>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name
            .strip_suffix("-band")
            .or_else(|| name.strip_suffix("band"))
            .unwrap_or(&name);
        match name {
            "k" => Ok(Band::K),
            "ka" => Ok(Band::Ka),
            "x" => Ok(Band::X),
            _ => Err(SimulationError::TransmitFrequency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_frequencies() {
        assert_eq!(Band::K.carrier_hz(), 24.150e9);
        assert_eq!(Band::Ka.carrier_hz(), 34.7e9);
        assert_eq!(Band::X.carrier_hz(), 10.525e9);
    }

    #[test]
    fn test_default_is_k_band() {
        assert_eq!(Band::default(), Band::K);
    }

    #[test]
    fn test_parse_plain_names() {
        assert_eq!("k".parse::<Band>().unwrap(), Band::K);
        assert_eq!("KA".parse::<Band>().unwrap(), Band::Ka);
        assert_eq!("x".parse::<Band>().unwrap(), Band::X);
    }

    #[test]
    fn test_parse_suffixed_names() {
        assert_eq!("K-band".parse::<Band>().unwrap(), Band::K);
        assert_eq!("Ka-Band".parse::<Band>().unwrap(), Band::Ka);
        assert_eq!("xband".parse::<Band>().unwrap(), Band::X);
    }

    #[test]
    fn test_parse_unknown_band() {
        assert_eq!(
            "w".parse::<Band>().unwrap_err(),
            SimulationError::TransmitFrequency
        );
        assert!("".parse::<Band>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Band::K.to_string(), "K-band");
        assert_eq!(Band::Ka.to_string(), "Ka-band");
        assert_eq!(Band::X.to_string(), "X-band");
    }
}
