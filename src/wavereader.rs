use std::fs;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use log::debug;

use super::buffer::AudioBuffer;
use super::codec::deinterleave;
use super::errors::Error;
use super::sample::Sample;
use super::scanner::scan;

/// Decode a complete wave file held in memory.
///
/// ```
/// use pcmwav::decode;
///
/// let bytes: Vec<u8> = [
///     &b"RIFF"[..], &42u32.to_le_bytes(), b"WAVE",
///     b"fmt ", &16u32.to_le_bytes(),
///     &1u16.to_le_bytes(), &1u16.to_le_bytes(),
///     &8000u32.to_le_bytes(), &16000u32.to_le_bytes(),
///     &2u16.to_le_bytes(), &16u16.to_le_bytes(),
///     b"data", &6u32.to_le_bytes(),
///     &[0x00, 0x80, 0x00, 0x00, 0xFF, 0x7F],
/// ].concat();
///
/// let buffer = decode::<f32>(&bytes).unwrap();
/// assert_eq!(buffer.sample_rate(), 8000);
/// assert_eq!(buffer.channel(0)[0], -1.0);
/// assert_eq!(buffer.channel(0)[1], 0.0);
/// ```
pub fn decode<S: Sample>(bytes: &[u8]) -> Result<AudioBuffer<S>, Error> {
    let layout = scan(bytes)?;
    let channels = deinterleave(layout.data(bytes), &layout.format)?;
    let buffer = AudioBuffer::from_parts(layout.format, channels)?;

    debug!(
        "decoded {} channels x {} samples at {} Hz",
        buffer.channel_count(),
        buffer.samples_per_channel(),
        buffer.sample_rate()
    );

    Ok(buffer)
}

/// Read and decode the wave file at `path`.
///
/// The whole file is read in one call and the file is closed before
/// decoding begins.
pub fn decode_file<S: Sample, P: AsRef<Path>>(path: P) -> Result<AudioBuffer<S>, Error> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

/// When `load()` does its work.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LoadMode {
    /// Decode on the calling thread before `load()` returns.
    #[default]
    Immediate,

    /// Decode on a background thread; the result is collected
    /// with `PendingLoad::wait()`.
    Deferred,
}

/// A decode started by `load()`.
#[derive(Debug)]
pub enum PendingLoad<S: Sample> {
    Ready(Result<AudioBuffer<S>, Error>),
    Running(JoinHandle<Result<AudioBuffer<S>, Error>>),
}

impl<S: Sample> PendingLoad<S> {
    /// `true` once the result can be taken without blocking.
    pub fn is_ready(&self) -> bool {
        match self {
            PendingLoad::Ready(_) => true,
            PendingLoad::Running(handle) => handle.is_finished(),
        }
    }

    /// Block until the decode is complete and return its result.
    pub fn wait(self) -> Result<AudioBuffer<S>, Error> {
        match self {
            PendingLoad::Ready(result) => result,
            PendingLoad::Running(handle) => match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            },
        }
    }
}

/// Decode the wave file at `path` according to `mode`.
///
/// Both modes run the same decoder; `Deferred` only moves it off the
/// calling thread.
pub fn load<S: Sample, P: AsRef<Path>>(path: P, mode: LoadMode) -> PendingLoad<S> {
    match mode {
        LoadMode::Immediate => PendingLoad::Ready(decode_file(path)),
        LoadMode::Deferred => {
            let path: PathBuf = path.as_ref().to_path_buf();
            PendingLoad::Running(thread::spawn(move || decode_file(path)))
        }
    }
}
