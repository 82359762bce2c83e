//! PCM sample transcoding between unit-range floats and 16-bit fixed point.
//!
//! The two directions use different scale constants on purpose:
//! [`ENCODE_SCALE`] (32767) going float to fixed, [`DECODE_SCALE`] (32768)
//! going fixed to float. A quantize/dequantize round trip therefore carries
//! a bounded per-sample error of roughly `1/32768`; payloads produced
//! against these constants depend on both staying exactly as they are.

use thiserror::Error;

use crate::audio::frame::FrameBuffer;

/// Multiplier applied when quantizing a unit-range float to fixed point.
///
/// `+1.0` maps to `32767`, the largest positive 16-bit value; `-1.0` maps
/// to `-32767`, one step short of the 16-bit minimum.
pub const ENCODE_SCALE: f32 = 32767.0;

/// Divisor applied when restoring a fixed-point sample to float.
///
/// `32768` is the full magnitude of the negative 16-bit range, so `-32768`
/// restores to exactly `-1.0`. Deliberately not the inverse of
/// [`ENCODE_SCALE`]; see the module docs.
pub const DECODE_SCALE: f32 = 32768.0;

/// Bytes occupied by one fixed-point sample on the wire.
pub const BYTES_PER_SAMPLE: usize = 2;

/// A non-finite sample (NaN or an infinity) was presented for quantization.
///
/// Clamping is only defined for real-valued input, so non-finite values
/// fail the whole call instead of being forced to a boundary value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("non-finite sample {value} at index {index}")]
pub struct InvalidSampleError {
    /// Position of the first offending sample in the input buffer.
    pub index: usize,
    /// The offending value.
    pub value: f32,
}

/// A byte buffer's length cannot tile into whole frames.
///
/// Raised when the length is odd, when the sample count does not divide by
/// the channel count, or when the channel count is zero. Signals an
/// upstream assembly bug or transport corruption; the buffer is never
/// zero-padded to make the call succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{byte_len} byte(s) cannot form whole {channel_count}-channel frames")]
pub struct TruncatedFrameError {
    /// Length of the rejected byte buffer.
    pub byte_len: usize,
    /// Channel count the buffer was supposed to interleave.
    pub channel_count: u32,
}

/// Quantizes a single sample, reporting its buffer position on failure.
pub(crate) fn quantize_sample(index: usize, sample: f32) -> Result<i16, InvalidSampleError> {
    // Finiteness first: clamp propagates NaN and the cast would silently
    // turn it into 0.
    if !sample.is_finite() {
        return Err(InvalidSampleError {
            index,
            value: sample,
        });
    }
    let clamped = sample.clamp(-1.0, 1.0);
    Ok((clamped * ENCODE_SCALE).round() as i16)
}

/// Quantizes one channel of unit-range samples into little-endian 16-bit
/// PCM bytes.
///
/// Each sample is clamped to `[-1.0, 1.0]`, scaled by [`ENCODE_SCALE`],
/// rounded to the nearest integer, and serialized least-significant byte
/// first. Out-of-range finite values clamp; they never wrap.
///
/// # Arguments
///
/// * `samples` - One channel's audio samples, nominally in `[-1.0, 1.0]`
///
/// # Returns
///
/// Raw PCM16 bytes (little-endian), two per input sample.
///
/// # Errors
///
/// [`InvalidSampleError`] when any sample is NaN or infinite; nothing is
/// emitted for a failing buffer.
///
/// # Example
///
/// ```rust
/// use voicewire_core::quantize_channel;
///
/// let bytes = quantize_channel(&[0.0, 1.0, -1.0]).unwrap();
/// assert_eq!(bytes.len(), 6); // 3 samples * 2 bytes
/// assert_eq!(&bytes[2..4], &[0xFF, 0x7F]); // +1.0 -> 32767
/// ```
pub fn quantize_channel(samples: &[f32]) -> Result<Vec<u8>, InvalidSampleError> {
    let mut bytes = Vec::with_capacity(samples.len() * BYTES_PER_SAMPLE);
    for (index, &sample) in samples.iter().enumerate() {
        let fixed = quantize_sample(index, sample)?;
        bytes.extend_from_slice(&fixed.to_le_bytes());
    }
    Ok(bytes)
}

/// Restores interleaved little-endian 16-bit PCM bytes into per-channel
/// float buffers.
///
/// Every consecutive byte pair is reinterpreted as a signed 16-bit sample,
/// scaled by `1 /` [`DECODE_SCALE`], and routed to its channel: sample `i`
/// of channel `c` comes from interleaved position `i * channel_count + c`.
///
/// # Arguments
///
/// * `bytes` - Interleaved PCM16 bytes (little-endian)
/// * `sample_rate` - Playback rate in Hz, carried into the result
/// * `channel_count` - Channels the bytes are interleaved across
///
/// # Returns
///
/// A [`FrameBuffer`] with `channel_count` buffers of equal length. An empty
/// byte buffer is legal and yields `channel_count` empty buffers.
///
/// # Errors
///
/// [`TruncatedFrameError`] when the byte length is odd, the sample count
/// does not divide by `channel_count`, or `channel_count` is zero.
///
/// # Example
///
/// ```rust
/// use voicewire_core::dequantize_interleaved;
///
/// // One 2-channel frame: ch0 = 0, ch1 = 32767.
/// let frames = dequantize_interleaved(&[0, 0, 0xFF, 0x7F], 16000, 2).unwrap();
/// assert_eq!(frames.frame_count(), 1);
/// assert_eq!(frames.channel(0), Some(&[0.0][..]));
/// ```
pub fn dequantize_interleaved(
    bytes: &[u8],
    sample_rate: u32,
    channel_count: u32,
) -> Result<FrameBuffer, TruncatedFrameError> {
    let truncated = TruncatedFrameError {
        byte_len: bytes.len(),
        channel_count,
    };
    if channel_count == 0 || bytes.len() % BYTES_PER_SAMPLE != 0 {
        return Err(truncated);
    }
    let num_channels = channel_count as usize;
    let sample_count = bytes.len() / BYTES_PER_SAMPLE;
    if sample_count % num_channels != 0 {
        return Err(truncated);
    }

    let frame_count = sample_count / num_channels;
    let mut channels: Vec<Vec<f32>> = (0..num_channels)
        .map(|_| Vec::with_capacity(frame_count))
        .collect();
    for (i, pair) in bytes.chunks_exact(BYTES_PER_SAMPLE).enumerate() {
        let fixed = i16::from_le_bytes([pair[0], pair[1]]);
        channels[i % num_channels].push(fixed as f32 / DECODE_SCALE);
    }

    Ok(FrameBuffer::new(channels, sample_rate))
}
