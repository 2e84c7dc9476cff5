use std::fmt::Debug;
use std::io;

/// A Four-character Code
///
/// Identifies a chunk within a RIFF stream. Codes are held and compared
/// exactly as the four bytes appear in the file, so host byte order
/// never enters into tag matching.
#[derive(Eq, PartialEq, Hash, Copy, Clone)]
pub struct FourCC([u8; 4]);

impl FourCC {
    pub const fn make(s: &[u8; 4]) -> Self {
        Self(*s)
    }

    /// The four-character code found at `offset` in `bytes`, if the slice
    /// is long enough to hold one.
    pub fn at(bytes: &[u8], offset: usize) -> Option<Self> {
        let end = offset.checked_add(4)?;
        let window = bytes.get(offset..end)?;
        Some(Self([window[0], window[1], window[2], window[3]]))
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        FourCC(bytes)
    }
}

impl From<FourCC> for [u8; 4] {
    fn from(fourcc: FourCC) -> Self {
        fourcc.0
    }
}

impl From<FourCC> for String {
    fn from(f: FourCC) -> Self {
        f.0.iter().map(|b| *b as char).collect::<String>()
    }
}

impl Debug for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let s: String = (*self).into();
        write!(f, "FourCC({})", s)
    }
}

pub trait ReadFourCC: io::Read {
    fn read_fourcc(&mut self) -> Result<FourCC, io::Error>;
}

pub trait WriteFourCC: io::Write {
    fn write_fourcc(&mut self, fourcc: FourCC) -> Result<(), io::Error>;
}

impl<T> ReadFourCC for T
where
    T: io::Read,
{
    fn read_fourcc(&mut self) -> Result<FourCC, io::Error> {
        let mut buf: [u8; 4] = [0; 4];
        self.read_exact(&mut buf)?;
        Ok(FourCC::from(buf))
    }
}

impl<T> WriteFourCC for T
where
    T: io::Write,
{
    fn write_fourcc(&mut self, fourcc: FourCC) -> Result<(), io::Error> {
        let buf: [u8; 4] = fourcc.into();
        self.write_all(&buf)?;
        Ok(())
    }
}

pub const RIFF_SIG: FourCC = FourCC::make(b"RIFF");
pub const WAVE_SIG: FourCC = FourCC::make(b"WAVE");

pub const FMT__SIG: FourCC = FourCC::make(b"fmt ");
pub const DATA_SIG: FourCC = FourCC::make(b"data");
