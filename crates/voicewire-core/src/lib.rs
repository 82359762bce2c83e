//! Voicewire Core - PCM sample transcoding and transport encoding for
//! voice payloads.
//!
//! Converts raw PCM audio between the floating-point buffers used by
//! capture/playback APIs and a compact, text-safe representation that
//! embeds in JSON-shaped messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use voicewire_core::AudioPayload;
//!
//! // Capture path: mono samples -> transportable record.
//! let samples = vec![0.0f32, 0.5, -0.5];
//! let payload = AudioPayload::from_mono(&samples, 16000).unwrap();
//!
//! // Playback path: record -> per-channel buffers.
//! let frames = payload.to_frames(1).unwrap();
//! assert_eq!(frames.frame_count(), 3);
//! ```
//!
//! ## Module Organization
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | text-safe codec, payload record, format tag |
//! | [`audio`] | sample transcoder, frame buffers, wav import/export |
//! | [`error`] | unified error type over the per-module errors |
//!
//! Every operation is a synchronous, side-effect-free transformation over
//! caller-owned buffers: no shared state, no ambient configuration, and no
//! I/O outside the explicit wav file helpers. All types are plain owned
//! data, safe to use from multiple threads.

// ============================================================================
// Errors
// ============================================================================

/// Unified error types for the public API.
///
/// The four core operations return their precise per-module errors;
/// [`VoicewireError`] aggregates them for composite calls.
pub mod error;
pub use error::{VoicewireError, VoicewireResult};

// ============================================================================
// Transport Layer
// ============================================================================

/// Text-safe binary codec, payload record, and format tag convention.
pub mod transport;

// ============================================================================
// Audio Layer
// ============================================================================

/// PCM transcoding, frame buffers, and wav import/export.
pub mod audio;

// ============================================================================
// Root Re-exports
// ============================================================================

pub use audio::{
    dequantize_interleaved, quantize_channel, read_wav, read_wav_file, write_wav, write_wav_file,
    FrameBuffer, InvalidSampleError, TruncatedFrameError, WavError, BYTES_PER_SAMPLE, DECODE_SCALE,
    ENCODE_SCALE,
};
pub use transport::{
    decode_bytes, encode_bytes, AudioPayload, MalformedEncodingError, MimeFormatError, PcmFormat,
};
