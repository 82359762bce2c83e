//! The `audio/pcm;rate=<hz>` format tag carried beside encoded payload
//! data.
//!
//! The transcoder itself never touches this string; callers render it when
//! assembling a payload and parse it back when opening one. The tag carries
//! no channel count, so that value stays an explicit out-of-band parameter.

use std::fmt;

use thiserror::Error;

/// Mime essence identifying raw 16-bit little-endian PCM payloads.
pub const PCM_MIME_ESSENCE: &str = "audio/pcm";

/// The format tag could not be used to interpret a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MimeFormatError {
    /// The essence is not `audio/pcm`.
    #[error("unsupported format tag `{found}`, expected `audio/pcm`")]
    UnsupportedFormat { found: String },

    /// No `rate` parameter was present.
    #[error("format tag is missing a `rate` parameter")]
    MissingRate,

    /// The `rate` parameter is not a positive integer.
    #[error("format tag rate `{value}` is not a positive integer")]
    InvalidRate { value: String },
}

/// Declared shape of a PCM payload body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl PcmFormat {
    /// Capture-side convention of the surrounding system: 16 kHz mono.
    pub const DEFAULT_CAPTURE_RATE: u32 = 16_000;

    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// The 16 kHz capture default.
    pub fn capture_default() -> Self {
        Self::new(Self::DEFAULT_CAPTURE_RATE)
    }

    /// Renders the tag, e.g. `audio/pcm;rate=16000`.
    pub fn mime_type(&self) -> String {
        format!("{PCM_MIME_ESSENCE};rate={}", self.sample_rate)
    }

    /// Parses a tag of the form `audio/pcm;rate=<hz>`.
    ///
    /// The essence match is ASCII case-insensitive, parameters may appear
    /// in any order with surrounding whitespace, and unrecognized
    /// parameters are ignored.
    ///
    /// # Errors
    ///
    /// [`MimeFormatError`] when the essence is not `audio/pcm` or the
    /// `rate` parameter is missing, zero, or unparseable.
    pub fn parse(tag: &str) -> Result<Self, MimeFormatError> {
        let mut parts = tag.split(';').map(str::trim);
        let essence = parts.next().unwrap_or_default();
        if !essence.eq_ignore_ascii_case(PCM_MIME_ESSENCE) {
            return Err(MimeFormatError::UnsupportedFormat {
                found: essence.to_string(),
            });
        }

        for param in parts {
            if let Some((key, value)) = param.split_once('=') {
                if key.trim().eq_ignore_ascii_case("rate") {
                    let value = value.trim();
                    return match value.parse::<u32>() {
                        Ok(rate) if rate > 0 => Ok(Self::new(rate)),
                        _ => Err(MimeFormatError::InvalidRate {
                            value: value.to_string(),
                        }),
                    };
                }
            }
        }

        Err(MimeFormatError::MissingRate)
    }
}

impl fmt::Display for PcmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime_type())
    }
}
