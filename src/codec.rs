//! Conversion between interleaved integer PCM and planar normalized samples.

use std::io::Write;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use dasp_sample::{FromSample, ToSample};
use log::warn;

use super::errors::Error;
use super::fmt::{WaveFmt, PCM_BITS_PER_SAMPLE};
use super::sample::Sample;

/// `2^(bits_per_sample - 1)`, the magnitude of the most negative sample.
fn full_scale(bits_per_sample: u16) -> f64 {
    (1u64 << (bits_per_sample - 1)) as f64
}

/// Split an interleaved 16-bit data payload into one buffer per channel.
///
/// Each integer is divided by `2^(bits_per_sample - 1)`. A trailing
/// partial frame, or a stray odd byte, is dropped.
pub fn deinterleave<S: Sample>(data: &[u8], format: &WaveFmt) -> Result<Vec<Vec<S>>, Error> {
    format.validate_decodable()?;

    let channel_count = format.channel_count as usize;
    let bytes_per_sample = (format.bits_per_sample / 8) as usize;
    let frame_size = channel_count * bytes_per_sample;
    let samples_per_channel = data.len() / bytes_per_sample / channel_count;

    if data.len() % frame_size != 0 {
        warn!(
            "dropping {} bytes of partial frame after {} frames",
            data.len() % frame_size,
            samples_per_channel
        );
    }

    let scale = full_scale(format.bits_per_sample);
    let mut channels: Vec<Vec<S>> = (0..channel_count)
        .map(|_| Vec::with_capacity(samples_per_channel))
        .collect();

    // channel c of frame s lives at interleaved index c + s * channel_count
    for frame in data.chunks_exact(frame_size) {
        for (channel, sample) in channels.iter_mut().zip(frame.chunks_exact(bytes_per_sample)) {
            let value = LittleEndian::read_i16(sample) as f64 / scale;
            channel.push(S::from_sample_(value));
        }
    }

    Ok(channels)
}

/// Scale a normalized sample to a 16-bit integer.
///
/// The scaled value is clipped to `[-32768, 32767]` and truncated toward
/// zero, so gain above unity saturates instead of wrapping. NaN becomes 0.
pub(crate) fn quantize<S: Sample>(sample: S) -> i16 {
    let scale = full_scale(PCM_BITS_PER_SAMPLE);
    let value: f64 = sample.to_sample_();
    (value * scale).clamp(-scale, scale - 1.0) as i16
}

/// Write planar channels as frame-major interleaved 16-bit PCM.
///
/// Every channel must hold at least `samples_per_channel` samples, otherwise
/// `InvalidBufferSize` is returned before anything is written.
pub fn interleave<S, W>(
    channels: &[Vec<S>],
    samples_per_channel: usize,
    writer: &mut W,
) -> Result<(), Error>
where
    S: Sample,
    W: Write,
{
    if channels.len() > u16::MAX as usize {
        return Err(Error::InvalidChannelCount);
    }

    if let Some(short) = channels.iter().find(|c| c.len() < samples_per_channel) {
        return Err(Error::InvalidBufferSize {
            buffer_size: short.len(),
            channel_count: channels.len() as u16,
        });
    }

    for s in 0..samples_per_channel {
        for channel in channels {
            writer.write_i16::<LittleEndian>(quantize(channel[s]))?;
        }
    }
    Ok(())
}
