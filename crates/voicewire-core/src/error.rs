//! Unified error surface for the crate.
//!
//! Each module keeps its own precise error type so the four core
//! operations stay single-failure-kind; this enum aggregates them for
//! composite operations and application callers. Module errors convert via
//! `From`, so `?` crosses layer boundaries without ceremony.

use thiserror::Error;

use crate::audio::pcm::{InvalidSampleError, TruncatedFrameError};
use crate::audio::wav::WavError;
use crate::transport::encoding::MalformedEncodingError;
use crate::transport::mime::MimeFormatError;

/// Any failure the crate can produce.
#[derive(Debug, Error)]
pub enum VoicewireError {
    /// Transport text was not a canonical encoding.
    #[error("malformed transport encoding: {0}")]
    Encoding(#[from] MalformedEncodingError),

    /// A capture buffer contained a non-finite sample.
    #[error("invalid sample: {0}")]
    Sample(#[from] InvalidSampleError),

    /// A payload's bytes cannot tile into whole frames.
    #[error("truncated frames: {0}")]
    Frames(#[from] TruncatedFrameError),

    /// A payload's format tag was missing or unusable.
    #[error("bad format tag: {0}")]
    Format(#[from] MimeFormatError),

    /// A wav container could not be read or written.
    #[error("wav error: {0}")]
    Wav(#[from] WavError),

    /// Payload JSON could not be produced or parsed.
    #[error("payload serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type VoicewireResult<T> = Result<T, VoicewireError>;
