//! Locating the `fmt ` and `data` chunks in a RIFF/WAVE byte stream.
//!
//! The first three tags sit at fixed offsets in any canonical wave file and
//! are checked exactly. Everything between the end of the `fmt ` body and the
//! `data` chunk is skipped by a bounded byte-wise search, so `LIST`, `fact`,
//! `JUNK` or any other chunk a writer put there is tolerated without being
//! understood.

use std::io::Cursor;

use byteorder::LittleEndian;
use byteorder::ReadBytesExt;
use log::{debug, trace, warn};

use super::chunks::ReadWaveChunks;
use super::errors::Error;
use super::fmt::{WaveFmt, PCM_FMT_SIZE};
use super::fourcc::{FourCC, ReadFourCC, DATA_SIG, FMT__SIG, RIFF_SIG, WAVE_SIG};

/// Number of offsets searched for the `data` tag after the `fmt ` body.
///
/// Files with more metadata than this ahead of their audio are reported
/// as `ChunkMissing`.
pub const MAX_DATA_SEARCH: usize = 32_768;

const FMT_BODY_START: usize = 20;

/// Where the pieces of a wave file were found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveLayout {
    /// The `fmt ` record as read from the file
    pub format: WaveFmt,

    /// Offset of the first sample byte
    pub data_start: usize,

    /// Length of the sample payload declared by the `data` chunk
    pub data_length: usize,
}

impl WaveLayout {
    /// The sample payload within the scanned buffer.
    pub fn data<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        &bytes[self.data_start..self.data_start + self.data_length]
    }
}

/// Scan a complete wave file held in memory.
///
/// ```
/// use pcmwav::{scan, Error};
///
/// let not_a_wave = b"OggS\x00\x02\x00\x00\x00\x00\x00\x00";
/// match scan(not_a_wave) {
///     Err(Error::MalformedContainer { .. }) => (),
///     other => panic!("Unexpected result {:?}", other),
/// }
/// ```
pub fn scan(bytes: &[u8]) -> Result<WaveLayout, Error> {
    let mut header = Cursor::new(bytes);

    expect_signature(&mut header, RIFF_SIG)?;
    let form_size = header.read_u32::<LittleEndian>()?;
    expect_signature(&mut header, WAVE_SIG)?;
    expect_signature(&mut header, FMT__SIG)?;
    let fmt_size = header.read_u32::<LittleEndian>()?;

    trace!("RIFF form size {}, buffer length {}", form_size, bytes.len());

    if fmt_size != PCM_FMT_SIZE {
        warn!("fmt chunk body is {} bytes, expected {}", fmt_size, PCM_FMT_SIZE);
    }

    let fmt_end = FMT_BODY_START.saturating_add(fmt_size as usize);
    let fmt_body = &bytes[FMT_BODY_START..fmt_end.min(bytes.len())];
    let format = Cursor::new(fmt_body).read_wave_fmt()?;
    format.validate_decodable()?;

    let tag_at = find_signature(bytes, fmt_end, DATA_SIG)?;
    debug!("found data chunk at offset {}", tag_at);

    let mut data_header = Cursor::new(&bytes[tag_at + 4..]);
    let declared = data_header.read_u32::<LittleEndian>()? as u64;
    let data_start = tag_at + 8;
    let available = (bytes.len() - data_start) as u64;

    if declared > available {
        return Err(Error::TruncatedData {
            declared,
            available,
        });
    }

    Ok(WaveLayout {
        format,
        data_start,
        data_length: declared as usize,
    })
}

fn expect_signature(cursor: &mut Cursor<&[u8]>, expected: FourCC) -> Result<(), Error> {
    let found = cursor.read_fourcc()?;
    if found == expected {
        Ok(())
    } else {
        Err(Error::MalformedContainer { expected, found })
    }
}

/// Byte-wise search for `signature` starting at `from`, giving up after
/// `MAX_DATA_SEARCH` offsets or at the end of `bytes`, whichever comes first.
fn find_signature(bytes: &[u8], from: usize, signature: FourCC) -> Result<usize, Error> {
    let last_tag_start = bytes.len().saturating_sub(3);
    (from..last_tag_start)
        .take(MAX_DATA_SEARCH)
        .find(|at| FourCC::at(bytes, *at) == Some(signature))
        .ok_or(Error::ChunkMissing { signature })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(fmt_size: u32, fmt_body: &[u8]) -> Vec<u8> {
        let mut bytes: Vec<u8> = vec![];
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&fmt_size.to_le_bytes());
        bytes.extend_from_slice(fmt_body);
        bytes
    }

    fn mono_fmt() -> Vec<u8> {
        let mut body = vec![0x01, 0x00, 0x01, 0x00];
        body.extend_from_slice(&8000u32.to_le_bytes());
        body.extend_from_slice(&16000u32.to_le_bytes());
        body.extend_from_slice(&[0x02, 0x00, 0x10, 0x00]);
        body
    }

    #[test]
    fn test_canonical_layout() {
        let mut bytes = header(16, &mono_fmt());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(&[1, 0, 2, 0]);

        let layout = scan(&bytes).unwrap();
        assert_eq!(layout.data_start, 44);
        assert_eq!(layout.data_length, 4);
        assert_eq!(layout.data(&bytes), &[1, 0, 2, 0]);
        assert_eq!(layout.format.sample_rate, 8000);
    }

    #[test]
    fn test_skips_intervening_chunks() {
        let mut bytes = header(18, &[mono_fmt(), vec![0, 0]].concat());
        bytes.extend_from_slice(b"LIST");
        bytes.extend_from_slice(&12u32.to_le_bytes());
        bytes.extend_from_slice(b"INFOISFT\x00\x00\x00\x00");
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0xFF, 0x7F]);

        let layout = scan(&bytes).unwrap();
        assert_eq!(layout.data_start, bytes.len() - 2);
        assert_eq!(layout.data(&bytes), &[0xFF, 0x7F]);
    }

    #[test]
    fn test_wrong_tags() {
        let mut bytes = header(16, &mono_fmt());
        bytes[8..12].copy_from_slice(b"AVI ");
        match scan(&bytes) {
            Err(Error::MalformedContainer { expected, found }) => {
                assert_eq!(expected, WAVE_SIG);
                assert_eq!(found, FourCC::make(b"AVI "));
            }
            other => panic!("Unexpected result {:?}", other),
        }

        let mut bytes = header(16, &mono_fmt());
        bytes[12..16].copy_from_slice(b"JUNK");
        assert!(matches!(
            scan(&bytes),
            Err(Error::MalformedContainer { expected: FMT__SIG, .. })
        ));
    }

    #[test]
    fn test_missing_data_at_end_of_buffer() {
        let bytes = header(16, &mono_fmt());
        assert!(matches!(
            scan(&bytes),
            Err(Error::ChunkMissing { signature: DATA_SIG })
        ));
    }

    #[test]
    fn test_search_budget_is_bounded() {
        let mut bytes = header(16, &mono_fmt());
        bytes.extend(std::iter::repeat(0u8).take(MAX_DATA_SEARCH));
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&0u32.to_le_bytes());

        assert!(matches!(
            scan(&bytes),
            Err(Error::ChunkMissing { signature: DATA_SIG })
        ));
    }

    #[test]
    fn test_data_at_last_searched_offset_is_found() {
        let mut bytes = header(16, &mono_fmt());
        bytes.extend(std::iter::repeat(0u8).take(MAX_DATA_SEARCH - 1));
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&0u32.to_le_bytes());

        let layout = scan(&bytes).unwrap();
        assert_eq!(layout.data_length, 0);
        assert_eq!(layout.data_start, bytes.len());
    }

    #[test]
    fn test_odd_fmt_size_without_pad_byte() {
        let mut bytes = header(17, &[mono_fmt(), vec![0]].concat());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0x00, 0x40]);

        let layout = scan(&bytes).unwrap();
        assert_eq!(layout.data_start, 45);
        assert_eq!(layout.data(&bytes), &[0x00, 0x40]);
    }

    #[test]
    fn test_odd_fmt_size_with_pad_byte() {
        let mut bytes = header(17, &[mono_fmt(), vec![0, 0]].concat());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0x00, 0x40]);

        let layout = scan(&bytes).unwrap();
        assert_eq!(layout.data_start, 46);
        assert_eq!(layout.data(&bytes), &[0x00, 0x40]);
    }

    #[test]
    fn test_unsupported_format_reported_before_data_search() {
        let mut fmt = mono_fmt();
        fmt[0] = 0x03;
        let bytes = header(16, &fmt);
        assert!(matches!(
            scan(&bytes),
            Err(Error::UnsupportedFormat { tag: 3, .. })
        ));

        let mut fmt = mono_fmt();
        fmt[2] = 0x00;
        let bytes = header(16, &fmt);
        assert!(matches!(scan(&bytes), Err(Error::InvalidChannelCount)));
    }

    #[test]
    fn test_truncated_data() {
        let mut bytes = header(16, &mono_fmt());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&100u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 10]);

        match scan(&bytes) {
            Err(Error::TruncatedData {
                declared,
                available,
            }) => {
                assert_eq!(declared, 100);
                assert_eq!(available, 10);
            }
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_short_header_is_io_error() {
        match scan(b"RIF") {
            Err(Error::IOError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_data_tag_without_size_field() {
        let mut bytes = header(16, &mono_fmt());
        bytes.extend_from_slice(b"data\x01");
        assert!(matches!(scan(&bytes), Err(Error::IOError(_))));
    }
}
