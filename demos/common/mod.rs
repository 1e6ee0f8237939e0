//! Common playback plumbing for the demo binaries.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use radartone::SampleBuffer;
use std::sync::Arc;
use std::time::Duration;

/// Plays a finished simulation buffer through the default output device,
/// blocking until the whole buffer has been heard.
///
/// The stream is opened at the buffer's own sample rate with a fixed
/// two-channel layout; device-specific routing beyond that is cpal's
/// problem, not ours.
pub fn play_buffer<const SAMPLE_RATE: u32>(buffer: &SampleBuffer<SAMPLE_RATE>) -> Result<()> {
    if buffer.is_empty() {
        return Ok(());
    }

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

    let sample_format = device.default_output_config()?.sample_format();
    let config = StreamConfig {
        channels: 2,
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Default,
    };

    // Interleaved left/right frames, ready to copy straight into the
    // device callback's buffer.
    let samples: Arc<Vec<f64>> = Arc::new(buffer.interleaved());

    let seconds = buffer.duration();
    let _stream = match sample_format {
        SampleFormat::F32 => create_playback_stream::<f32>(&device, &config, samples)?,
        SampleFormat::I16 => create_playback_stream::<i16>(&device, &config, samples)?,
        SampleFormat::U16 => create_playback_stream::<u16>(&device, &config, samples)?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    // The stream pulls frames on its own thread; hold it open until the
    // buffer is exhausted plus a little drain margin.
    std::thread::sleep(Duration::from_secs_f64(seconds) + Duration::from_millis(200));

    Ok(())
}

/// Creates an output stream that feeds interleaved samples from the buffer
/// and goes silent once they run out.
fn create_playback_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    samples: Arc<Vec<f64>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
{
    let mut position = 0usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            for frame in data.chunks_mut(2) {
                let l = samples.get(position).copied().unwrap_or(0.0);
                let r = samples.get(position + 1).copied().unwrap_or(0.0);
                position += 2;
                frame[0] = T::from_sample(l);
                if let Some(right) = frame.get_mut(1) {
                    *right = T::from_sample(r);
                }
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}
