const BASIC_PCM: u16 = 0x0001;
const BASIC_FLOAT: u16 = 0x0003;
const BASIC_EXTENDED: u16 = 0xFFFE;

/// Sample format of the Wave file, resolved from its basic format tag.
///
/// Only `IntegerPCM` can be decoded; the other variants exist so an
/// unsupported file can be described precisely.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CommonFormat {
    /// Integer linear PCM
    IntegerPCM,

    /// IEEE Floating-point Linear PCM
    IeeeFloatPCM,

    /// `WAVE_FORMAT_EXTENSIBLE`, whose codec is named by a GUID
    /// this crate does not read.
    Extensible,

    /// An unknown format identified by a basic format tag.
    UnknownBasic(u16),
}

impl CommonFormat {
    /// Resolve a basic format tag to a `CommonFormat`.
    pub fn make(basic: u16) -> Self {
        match basic {
            BASIC_PCM => Self::IntegerPCM,
            BASIC_FLOAT => Self::IeeeFloatPCM,
            BASIC_EXTENDED => Self::Extensible,
            x => CommonFormat::UnknownBasic(x),
        }
    }

    /// The basic format tag written to a `fmt ` chunk.
    pub fn basic_tag(self) -> u16 {
        match self {
            Self::IntegerPCM => BASIC_PCM,
            Self::IeeeFloatPCM => BASIC_FLOAT,
            Self::Extensible => BASIC_EXTENDED,
            Self::UnknownBasic(x) => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_tag_one_is_integer_pcm() {
        assert_eq!(CommonFormat::make(0x0001), CommonFormat::IntegerPCM);
        assert_eq!(CommonFormat::make(0x0003), CommonFormat::IeeeFloatPCM);
        assert_eq!(CommonFormat::make(0xFFFE), CommonFormat::Extensible);
    }

    #[test]
    fn test_unknown_formats() {
        assert_eq!(CommonFormat::make(0x0055), CommonFormat::UnknownBasic(0x55));
        assert_eq!(CommonFormat::UnknownBasic(0x55).basic_tag(), 0x55);
        assert_eq!(CommonFormat::Extensible.basic_tag(), 0xFFFE);
    }
}
