//! Mixing vehicle signals into one composite buffer.

use crate::buffer::SampleBuffer;
use crate::error::SimulationError;

/// Sums an ordered collection of vehicle buffers into one composite buffer.
///
/// Summation is element-wise per channel, accumulated into the first buffer
/// in input order. All buffers in a run share the same duration and sample
/// rate, so they are always equal length; the rate is enforced by the type
/// and the length is asserted in debug builds.
///
/// A single buffer passes through unchanged.
///
/// # Errors
///
/// Fails with [`SimulationError::NoData`] when `buffers` is empty; with no
/// first buffer there is nothing to accumulate into.
///
/// # Examples
///
/// ```
/// use radartone::{Direction, mix, synthesize};
///
/// let a = synthesize::<44100>(1_000.0, Direction::Approaching, 0.1, 1.0).unwrap();
/// let b = synthesize::<44100>(2_000.0, Direction::Receding, 0.1, 0.5).unwrap();
///
/// let composite = mix(vec![a, b]).unwrap();
/// assert_eq!(composite.len(), 4_410);
/// ```
pub fn mix<const SAMPLE_RATE: u32>(
    buffers: Vec<SampleBuffer<SAMPLE_RATE>>,
) -> Result<SampleBuffer<SAMPLE_RATE>, SimulationError> {
    let mut buffers = buffers.into_iter();
    let mut composite = buffers.next().ok_or(SimulationError::NoData)?;
    for buffer in buffers {
        composite += &buffer;
    }
    Ok(composite)
}
