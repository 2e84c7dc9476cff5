use std::fs;
use std::io::Write;
use std::path::Path;

use byteorder::LittleEndian;
use byteorder::WriteBytesExt;
use log::debug;

use super::buffer::AudioBuffer;
use super::chunks::WriteWaveChunks;
use super::codec::interleave;
use super::errors::Error;
use super::fmt::{WaveFmt, PCM_FMT_SIZE};
use super::fourcc::{WriteFourCC, DATA_SIG, FMT__SIG, RIFF_SIG, WAVE_SIG};
use super::sample::Sample;

/// Bytes of header between the `RIFF` size field and the sample data
/// in a canonical file: `WAVE`, the `fmt ` chunk and the `data` header.
const CANONICAL_FORM_OVERHEAD: u32 = 4 + (8 + PCM_FMT_SIZE) + 8;

/// Size of the sample payload for `buffer` as 16-bit PCM.
fn data_size<S: Sample>(buffer: &AudioBuffer<S>, format: &WaveFmt) -> Result<u32, Error> {
    let bytes = buffer.samples_per_channel() as u64 * format.block_alignment as u64;
    if bytes + CANONICAL_FORM_OVERHEAD as u64 > u32::MAX as u64 {
        Err(Error::DataTooLarge { bytes })
    } else {
        Ok(bytes as u32)
    }
}

/// Encode `buffer` as a canonical 16-bit PCM wave file into `writer`.
///
/// The header is derived entirely from the buffer: sample rate and channel
/// count are taken from it, byte rate and block alignment are recomputed,
/// and both size fields are counted from the samples actually written.
/// Samples outside `[-1.0, 1.0)` are clipped.
pub fn encode_to<S, W>(buffer: &AudioBuffer<S>, writer: &mut W) -> Result<(), Error>
where
    S: Sample,
    W: Write,
{
    let format = WaveFmt::new_pcm(buffer.sample_rate(), buffer.channel_count())?;
    let data_size = data_size(buffer, &format)?;

    debug!(
        "encoding {} channels x {} samples, {} data bytes",
        format.channel_count,
        buffer.samples_per_channel(),
        data_size
    );

    writer.write_fourcc(RIFF_SIG)?;
    writer.write_u32::<LittleEndian>(CANONICAL_FORM_OVERHEAD + data_size)?;
    writer.write_fourcc(WAVE_SIG)?;

    writer.write_fourcc(FMT__SIG)?;
    writer.write_u32::<LittleEndian>(PCM_FMT_SIZE)?;
    writer.write_wave_fmt(&format)?;

    writer.write_fourcc(DATA_SIG)?;
    writer.write_u32::<LittleEndian>(data_size)?;
    interleave(buffer.planar(), buffer.samples_per_channel(), writer)?;

    Ok(())
}

/// Encode `buffer` as a complete wave file in memory.
///
/// ```
/// use pcmwav::{encode, AudioBuffer};
///
/// let buffer = AudioBuffer::from_channels(8000, vec![vec![-1.0f32, 0.0, 1.0]]).unwrap();
/// let bytes = encode(&buffer).unwrap();
///
/// assert_eq!(bytes.len(), 44 + 6);
/// assert_eq!(&bytes[4..8], &42u32.to_le_bytes());
/// assert_eq!(&bytes[44..], &[0x00, 0x80, 0x00, 0x00, 0xFF, 0x7F]);
/// ```
pub fn encode<S: Sample>(buffer: &AudioBuffer<S>) -> Result<Vec<u8>, Error> {
    let format = WaveFmt::new_pcm(buffer.sample_rate(), buffer.channel_count())?;
    let capacity = 8 + CANONICAL_FORM_OVERHEAD as usize + data_size(buffer, &format)? as usize;
    let mut bytes: Vec<u8> = Vec::with_capacity(capacity);
    encode_to(buffer, &mut bytes)?;
    Ok(bytes)
}

/// Encode `buffer` and write it to `path` in one call.
///
/// The file is only created once encoding has succeeded.
pub fn encode_file<S, P>(buffer: &AudioBuffer<S>, path: P) -> Result<(), Error>
where
    S: Sample,
    P: AsRef<Path>,
{
    let bytes = encode(buffer)?;
    fs::write(path, bytes)?;
    Ok(())
}
