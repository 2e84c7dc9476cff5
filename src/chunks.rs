use std::io::{Read, Write};

use super::errors::Error as ParserError;

use byteorder::LittleEndian;
use byteorder::{ReadBytesExt, WriteBytesExt};

use super::fmt::WaveFmt;

pub trait ReadWaveChunks: Read {
    /// Read the six fixed fields at the start of a `fmt ` chunk body.
    fn read_wave_fmt(&mut self) -> Result<WaveFmt, ParserError>;
}

pub trait WriteWaveChunks: Write {
    fn write_wave_fmt(&mut self, format: &WaveFmt) -> Result<(), ParserError>;
}

impl<T> WriteWaveChunks for T
where
    T: Write,
{
    fn write_wave_fmt(&mut self, format: &WaveFmt) -> Result<(), ParserError> {
        self.write_u16::<LittleEndian>(format.tag)?;
        self.write_u16::<LittleEndian>(format.channel_count)?;
        self.write_u32::<LittleEndian>(format.sample_rate)?;
        self.write_u32::<LittleEndian>(format.bytes_per_second)?;
        self.write_u16::<LittleEndian>(format.block_alignment)?;
        self.write_u16::<LittleEndian>(format.bits_per_sample)?;
        Ok(())
    }
}

impl<T> ReadWaveChunks for T
where
    T: Read,
{
    fn read_wave_fmt(&mut self) -> Result<WaveFmt, ParserError> {
        Ok(WaveFmt {
            tag: self.read_u16::<LittleEndian>()?,
            channel_count: self.read_u16::<LittleEndian>()?,
            sample_rate: self.read_u32::<LittleEndian>()?,
            bytes_per_second: self.read_u32::<LittleEndian>()?,
            block_alignment: self.read_u16::<LittleEndian>()?,
            bits_per_sample: self.read_u16::<LittleEndian>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_fmt_fields_are_little_endian() {
        let body: [u8; 16] = [
            0x01, 0x00, // tag
            0x02, 0x00, // channels
            0x44, 0xAC, 0x00, 0x00, // 44100
            0x10, 0xB1, 0x02, 0x00, // 176400
            0x04, 0x00, // block align
            0x10, 0x00, // bits
        ];
        let format = Cursor::new(&body[..]).read_wave_fmt().unwrap();
        assert_eq!(format.tag, 1);
        assert_eq!(format.channel_count, 2);
        assert_eq!(format.sample_rate, 44100);
        assert_eq!(format.bytes_per_second, 176_400);
        assert_eq!(format.block_alignment, 4);
        assert_eq!(format.bits_per_sample, 16);

        let mut written: Vec<u8> = vec![];
        written.write_wave_fmt(&format).unwrap();
        assert_eq!(written, body);
    }

    #[test]
    fn test_short_fmt_body_is_io_error() {
        let body = [0x01u8, 0x00, 0x01];
        match Cursor::new(&body[..]).read_wave_fmt() {
            Err(ParserError::IOError(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof)
            }
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_trailing_fmt_bytes_are_ignored() {
        let mut body: Vec<u8> = vec![0xFE, 0xFF, 0x06, 0x00];
        body.extend_from_slice(&48000u32.to_le_bytes());
        body.extend_from_slice(&576_000u32.to_le_bytes());
        body.extend_from_slice(&[0x0C, 0x00, 0x10, 0x00]);
        body.extend_from_slice(&[22, 0, 16, 0, 0x3F, 0, 0, 0]);

        let format = Cursor::new(&body[..]).read_wave_fmt().unwrap();
        assert_eq!(format.tag, 0xFFFE);
        assert_eq!(format.channel_count, 6);
        assert_eq!(format.block_alignment, 12);
    }
}
