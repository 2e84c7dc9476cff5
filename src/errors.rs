use super::fourcc::FourCC;
use std::error::Error as StdError;
use std::{
    fmt::{Debug, Display},
    io,
};

/// Errors returned by methods in this crate.
#[derive(Debug)]
pub enum Error {
    /// An `io::Error` occurred, including a read that came up short
    IOError(io::Error),

    /// A mandatory tag at a fixed offset did not match
    ///
    /// `RIFF` at 0, `WAVE` at 8 and `fmt ` at 12 are the structural
    /// contract of the container.
    MalformedContainer { expected: FourCC, found: FourCC },

    /// The format tag or bit depth can't be decoded by this crate
    UnsupportedFormat { tag: u16, bits_per_sample: u16 },

    /// The format declares zero channels
    InvalidChannelCount,

    /// A chunk required to complete the operation was not found
    /// within the search window
    ChunkMissing { signature: FourCC },

    /// The `data` chunk declares more bytes than the stream holds
    TruncatedData { declared: u64, available: u64 },

    /// Planar channels of unequal length were provided
    InvalidBufferSize {
        buffer_size: usize,
        channel_count: u16,
    },

    /// The sample payload can't be described by 32-bit RIFF size fields
    DataTooLarge { bytes: u64 },
}

impl StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::IOError(error)
    }
}
