use super::common_format::CommonFormat;
use super::errors::Error;

/// Bit depth handled by the sample codec.
pub const PCM_BITS_PER_SAMPLE: u16 = 16;

/// Length of a plain `WAVEFORMAT`/`PCMWAVEFORMAT` body.
pub const PCM_FMT_SIZE: u32 = 16;

/// Speaker arrangement implied by the channel count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelLayout {
    Mono,
    Stereo,
    Multichannel(u16),
}

impl From<u16> for ChannelLayout {
    fn from(channel_count: u16) -> Self {
        match channel_count {
            1 => Self::Mono,
            2 => Self::Stereo,
            n => Self::Multichannel(n),
        }
    }
}

/**
 * WAV file data format record.
 *
 * The `fmt` record contains essential information describing the binary
 * structure of the data segment of the WAVE file, such as sample
 * rate, sample binary format, channel count, etc.
 *
 * `bytes_per_second` and `block_alignment` are kept exactly as they were
 * read. They are never trusted when writing: the encoder builds a fresh
 * record with [`WaveFmt::new_pcm`].
 */
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct WaveFmt {
    /// A tag identifying the codec in use.
    ///
    /// Only 0x0001, integer linear PCM, can be decoded.
    pub tag: u16,

    /// Count of audio channels in each frame
    pub channel_count: u16,

    /// Sample rate of the audio data
    pub sample_rate: u32,

    /// Count of bytes per second
    ///
    /// By rule, this is `block_alignment * sample_rate`
    pub bytes_per_second: u32,

    /// Count of bytes per audio frame
    ///
    /// By rule, this is `channel_count * bits_per_sample / 8`
    pub block_alignment: u16,

    /// Count of bits stored in the file per sample
    pub bits_per_sample: u16,
}

impl WaveFmt {
    /// Create a new 16-bit integer PCM format `WaveFmt`
    ///
    /// Byte rate and block alignment are derived from the arguments.
    pub fn new_pcm(sample_rate: u32, channel_count: u16) -> Result<Self, Error> {
        if channel_count == 0 {
            return Err(Error::InvalidChannelCount);
        }

        let bytes_per_sample = PCM_BITS_PER_SAMPLE / 8;
        let block_alignment = channel_count
            .checked_mul(bytes_per_sample)
            .ok_or(Error::InvalidChannelCount)?;
        let bytes_per_second = sample_rate
            .checked_mul(block_alignment as u32)
            .ok_or(Error::DataTooLarge {
                bytes: sample_rate as u64 * block_alignment as u64,
            })?;

        Ok(WaveFmt {
            tag: CommonFormat::IntegerPCM.basic_tag(),
            channel_count,
            sample_rate,
            bytes_per_second,
            block_alignment,
            bits_per_sample: PCM_BITS_PER_SAMPLE,
        })
    }

    pub fn common_format(&self) -> CommonFormat {
        CommonFormat::make(self.tag)
    }

    pub fn channel_layout(&self) -> ChannelLayout {
        ChannelLayout::from(self.channel_count)
    }

    /// Confirm the sample codec can decode audio in this format.
    ///
    /// A format tag other than 1 or a bit depth other than 16 is
    /// `UnsupportedFormat`; zero channels is `InvalidChannelCount`.
    /// The stored `block_alignment` and `bytes_per_second` are not checked;
    /// the decoder derives frame size from `channel_count` alone.
    pub fn validate_decodable(&self) -> Result<(), Error> {
        if self.common_format() != CommonFormat::IntegerPCM
            || self.bits_per_sample != PCM_BITS_PER_SAMPLE
        {
            return Err(Error::UnsupportedFormat {
                tag: self.tag,
                bits_per_sample: self.bits_per_sample,
            });
        }

        if self.channel_count == 0 {
            return Err(Error::InvalidChannelCount);
        }

        Ok(())
    }
}
