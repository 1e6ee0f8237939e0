//! Per-vehicle echo tone synthesis.

use std::f64::consts::PI;

use crate::buffer::SampleBuffer;
use crate::direction::Direction;
use crate::error::SimulationError;

/// Gain applied to the right channel relative to the left.
///
/// Together with the quarter-cycle phase offset this asymmetry is the
/// direction cue a radar gun's stereo pickup resolves. The value is
/// inherited from the reference hardware calibration and must not change.
pub const RIGHT_CHANNEL_GAIN: f64 = 1.9;

/// Synthesizes one vehicle's echo as a stereo cosine tone.
///
/// The buffer holds `round(duration_s * SAMPLE_RATE)` samples per channel,
/// generated from 1-based sample indices. The left channel is the plain
/// beat tone; the right channel is the same tone shifted by the direction's
/// phase offset and scaled by [`RIGHT_CHANNEL_GAIN`]. Both channels are
/// scaled by `amplitude`.
///
/// No clipping protection happens here; the composite buffer is
/// peak-normalized after mixing instead, so relative vehicle levels are
/// kept intact until the very last step.
///
/// # Errors
///
/// Fails with [`SimulationError::Direction`] when `direction` is
/// [`Direction::Unspecified`].
///
/// # Examples
///
/// ```
/// use radartone::{Direction, synthesize};
///
/// let buffer = synthesize::<44100>(4_321.0, Direction::Approaching, 1.0, 1.0).unwrap();
/// assert_eq!(buffer.len(), 44_100);
/// assert_eq!(buffer.left().len(), buffer.right().len());
/// ```
pub fn synthesize<const SAMPLE_RATE: u32>(
    beat_hz: f64,
    direction: Direction,
    duration_s: f64,
    amplitude: f64,
) -> Result<SampleBuffer<SAMPLE_RATE>, SimulationError> {
    let phase_offset = direction.phase_offset()?;
    let sample_rate = SAMPLE_RATE as f64;
    // Saturating float-to-int cast: a negative duration yields an empty
    // buffer rather than wrapping.
    let samples = (duration_s * sample_rate).round() as usize;

    let mut left = Vec::with_capacity(samples);
    let mut right = Vec::with_capacity(samples);
    for i in 1..=samples {
        let theta = 2.0 * PI * beat_hz * i as f64 / sample_rate;
        left.push(amplitude * theta.cos());
        right.push(amplitude * RIGHT_CHANNEL_GAIN * (theta - phase_offset).cos());
    }
    Ok(SampleBuffer::from_channels(left, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_length_matches_duration() {
        let buffer = synthesize::<44100>(1000.0, Direction::Approaching, 1.0, 1.0).unwrap();
        assert_eq!(buffer.len(), 44100);

        let buffer = synthesize::<44100>(1000.0, Direction::Approaching, 0.25, 1.0).unwrap();
        assert_eq!(buffer.len(), 11025);
    }

    #[test]
    fn test_length_rounds_not_truncates() {
        // 0.99999 s at 8 kHz is 7999.92 samples, which rounds up to 8000.
        let buffer = synthesize::<8000>(100.0, Direction::Receding, 0.99999, 1.0).unwrap();
        assert_eq!(buffer.len(), 8000);
    }

    #[test]
    fn test_zero_duration_yields_empty_buffer() {
        let buffer = synthesize::<44100>(1000.0, Direction::Approaching, 0.0, 1.0).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_negative_duration_yields_empty_buffer() {
        let buffer = synthesize::<44100>(1000.0, Direction::Approaching, -2.0, 1.0).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_unspecified_direction_fails() {
        let result = synthesize::<44100>(1000.0, Direction::Unspecified, 1.0, 1.0);
        assert_eq!(result.unwrap_err(), SimulationError::Direction);
    }

    #[test]
    fn test_first_sample_uses_index_one() {
        let beat = 1000.0;
        let buffer = synthesize::<44100>(beat, Direction::Approaching, 0.01, 1.0).unwrap();
        let expected = (2.0 * PI * beat / 44100.0).cos();
        assert!((buffer.left()[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_right_channel_gain_and_phase() {
        let beat = 500.0;
        let buffer = synthesize::<44100>(beat, Direction::Approaching, 0.01, 1.0).unwrap();
        let theta = 2.0 * PI * beat / 44100.0;
        let expected = RIGHT_CHANNEL_GAIN * (theta - std::f64::consts::FRAC_PI_2).cos();
        assert!((buffer.right()[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_amplitude_scales_both_channels() {
        let unit = synthesize::<44100>(700.0, Direction::Receding, 0.01, 1.0).unwrap();
        let half = synthesize::<44100>(700.0, Direction::Receding, 0.01, 0.5).unwrap();
        for i in 0..unit.len() {
            assert!((half.left()[i] - 0.5 * unit.left()[i]).abs() < 1e-12);
            assert!((half.right()[i] - 0.5 * unit.right()[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_direction_mirrors_right_channel_only() {
        // cos(x - pi/2) = sin(x) and cos(x + pi/2) = -sin(x), so swapping the
        // direction negates the right channel and leaves the left alone.
        let approaching = synthesize::<44100>(1234.0, Direction::Approaching, 0.02, 1.0).unwrap();
        let receding = synthesize::<44100>(1234.0, Direction::Receding, 0.02, 1.0).unwrap();
        for i in 0..approaching.len() {
            assert!((approaching.left()[i] - receding.left()[i]).abs() < 1e-12);
            assert!((approaching.right()[i] + receding.right()[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_no_clipping_applied_during_synthesis() {
        // Amplitude above 1.0 must survive synthesis untouched.
        let buffer = synthesize::<44100>(2000.0, Direction::Approaching, 0.1, 3.0).unwrap();
        assert!(buffer.peak() > 1.0);
    }
}
