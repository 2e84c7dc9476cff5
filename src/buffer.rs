use std::slice::Iter;

use super::errors::Error;
use super::fmt::{ChannelLayout, WaveFmt};
use super::sample::Sample;

/// Decoded audio held in memory as one sample buffer per channel.
///
/// The format record describes where the audio came from; the channel
/// buffers are what gets written. Every channel has the same length and
/// the number of channels always equals `format().channel_count`.
///
/// Signal processing is done by the caller through `channel_mut()`:
///
/// ```
/// use pcmwav::AudioBuffer;
///
/// let mut buffer = AudioBuffer::from_channels(48000, vec![vec![0.25f32, -0.5]]).unwrap();
/// for sample in buffer.channel_mut(0) {
///     *sample *= 2.0;
/// }
/// assert_eq!(buffer.channel(0), &[0.5, -1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer<S: Sample> {
    format: WaveFmt,
    channels: Vec<Vec<S>>,
}

impl<S: Sample> Default for AudioBuffer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sample> AudioBuffer<S> {
    /// An empty buffer with a zeroed format and no channels.
    pub fn new() -> Self {
        AudioBuffer {
            format: WaveFmt::default(),
            channels: vec![],
        }
    }

    /// Build a buffer from planar channel data.
    ///
    /// The format is a fresh 16-bit PCM record for `sample_rate` and the
    /// number of channels given. Fails if `channels` is empty or ragged.
    pub fn from_channels(sample_rate: u32, channels: Vec<Vec<S>>) -> Result<Self, Error> {
        if channels.len() > u16::MAX as usize {
            return Err(Error::InvalidChannelCount);
        }

        let format = WaveFmt::new_pcm(sample_rate, channels.len() as u16)?;
        Self::from_parts(format, channels)
    }

    /// Pair a decoded format record with its channel buffers.
    pub(crate) fn from_parts(format: WaveFmt, channels: Vec<Vec<S>>) -> Result<Self, Error> {
        let expected = channels.first().map(|c| c.len()).unwrap_or(0);

        if channels.len() != format.channel_count as usize {
            return Err(Error::InvalidChannelCount);
        }

        if let Some(ragged) = channels.iter().find(|c| c.len() != expected) {
            return Err(Error::InvalidBufferSize {
                buffer_size: ragged.len(),
                channel_count: format.channel_count,
            });
        }

        Ok(AudioBuffer { format, channels })
    }

    /// The format record as decoded, or as built by `from_channels()`.
    pub fn format(&self) -> &WaveFmt {
        &self.format
    }

    pub fn channel_count(&self) -> u16 {
        self.format.channel_count
    }

    pub fn channel_layout(&self) -> ChannelLayout {
        self.format.channel_layout()
    }

    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// Count of samples in each channel.
    pub fn samples_per_channel(&self) -> usize {
        self.channels.first().map(|c| c.len()).unwrap_or(0)
    }

    /// `true` if there are no channels or no samples.
    pub fn is_empty(&self) -> bool {
        self.samples_per_channel() == 0
    }

    /// Samples of channel `index`.
    ///
    /// ### Panics
    ///
    /// If `index` is not less than `channel_count()`.
    pub fn channel(&self, index: usize) -> &[S] {
        &self.channels[index]
    }

    /// Mutable samples of channel `index`.
    ///
    /// The slice can be written freely but not resized, which keeps the
    /// channels the same length.
    ///
    /// ### Panics
    ///
    /// If `index` is not less than `channel_count()`.
    pub fn channel_mut(&mut self, index: usize) -> &mut [S] {
        &mut self.channels[index]
    }

    pub fn channels(&self) -> Iter<'_, Vec<S>> {
        self.channels.iter()
    }

    pub fn channels_mut(&mut self) -> impl Iterator<Item = &mut [S]> {
        self.channels.iter_mut().map(|c| c.as_mut_slice())
    }

    pub(crate) fn planar(&self) -> &[Vec<S>] {
        &self.channels
    }
}
