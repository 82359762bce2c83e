//! Audio-side concerns: the sample transcoder, the frame buffer it
//! produces, and wav import/export.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`pcm`] | quantize/dequantize between unit floats and 16-bit PCM |
//! | [`frame`] | `FrameBuffer`, de-interleaved playback-ready audio |
//! | [`wav`] | wav container import/export |

pub mod frame;
pub mod pcm;
pub mod wav;

pub use frame::FrameBuffer;
pub use pcm::{
    dequantize_interleaved, quantize_channel, InvalidSampleError, TruncatedFrameError,
    BYTES_PER_SAMPLE, DECODE_SCALE, ENCODE_SCALE,
};
pub use wav::{read_wav, read_wav_file, write_wav, write_wav_file, WavError};
