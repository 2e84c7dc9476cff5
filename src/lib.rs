/*!
# pcmwav

Rust PCM Wave File Decoder/Encoder with planar floating-point sample buffers.

A wave file is decoded in one call into an [`AudioBuffer`], a set of
per-channel sample buffers normalized to `[-1.0, 1.0)`. The caller processes
the samples in place and encodes the buffer back into a canonical 44-byte
header wave file.

```
use pcmwav::{decode, encode, AudioBuffer};

let buffer = AudioBuffer::from_channels(8000, vec![vec![-1.0f32, 0.0, 0.5]]).unwrap();
let bytes = encode(&buffer).unwrap();

let mut decoded = decode::<f32>(&bytes).unwrap();
for sample in decoded.channel_mut(0) {
    *sample *= 4.0; // clipped when encoded
}

let clipped = decode::<f32>(&encode(&decoded).unwrap()).unwrap();
assert_eq!(clipped.channel(0)[0], -1.0);
assert_eq!(clipped.channel(0)[2], 32767.0 / 32768.0);
```

## Objectives

- Read any RIFF/WAVE file holding 16-bit integer PCM, whatever chunks
  other writers have placed between `fmt ` and `data`.
- Write minimal, self-consistent files: every header field is derived from
  the buffer being written, never copied from the source file.
- Fail with a typed [`Error`] on any container or format problem, never
  panic on untrusted input.

Things that are _not_ in the scope of this package:

- Codecs other than integer linear PCM (format tag 0x0001), including
  `WAVE_FORMAT_EXTENSIBLE`, and bit depths other than 16.
- Streaming; a file is always read or written in full.
- Metadata chunks. They are skipped on read and not written.

## Resources

- [Peter Kabal, McGill University](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/WAVE.html)
- [Multimedia Programming Interface and Data Specifications 1.0](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/Docs/riffmci.pdf)
  (August 1991), IBM Corporation and Microsoft Corporation
- [MSDN WAVEFORMATEX](https://docs.microsoft.com/en-us/windows/win32/api/mmeapi/ns-mmeapi-waveformatex)
*/

extern crate byteorder;
extern crate dasp_sample;
extern crate log;

mod common_format;
mod errors;
mod fourcc;

mod chunks;
mod scanner;

mod buffer;
mod codec;
mod fmt;
mod sample;

mod wavereader;
mod wavewriter;

pub use buffer::AudioBuffer;
pub use codec::{deinterleave, interleave};
pub use common_format::CommonFormat;
pub use errors::Error;
pub use fmt::{ChannelLayout, WaveFmt};
pub use fourcc::{FourCC, DATA_SIG, FMT__SIG, RIFF_SIG, WAVE_SIG};
pub use sample::Sample;
pub use scanner::{scan, WaveLayout, MAX_DATA_SEARCH};
pub use wavereader::{decode, decode_file, load, LoadMode, PendingLoad};
pub use wavewriter::{encode, encode_file, encode_to};
