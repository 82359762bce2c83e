//! The transport record pairing encoded audio bytes with their format tag.

use serde::{Deserialize, Serialize};

use crate::audio::frame::FrameBuffer;
use crate::audio::pcm::{self, InvalidSampleError};
use crate::error::VoicewireError;
use crate::transport::encoding::{decode_bytes, encode_bytes, MalformedEncodingError};
use crate::transport::mime::{MimeFormatError, PcmFormat};

/// One transportable chunk of captured audio.
///
/// Serializes to the wire shape the surrounding messaging layer expects:
///
/// ```json
/// {"data": "<base64 pcm>", "mimeType": "audio/pcm;rate=16000"}
/// ```
///
/// The record is inert data; interpretation happens through the accessor
/// methods, and the channel count needed to open a multi-channel payload
/// travels out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPayload {
    /// Base64 text of the little-endian 16-bit interleaved sample bytes.
    pub data: String,
    /// Format tag, `audio/pcm;rate=<hz>`.
    pub mime_type: String,
}

impl AudioPayload {
    /// Packs one captured mono channel for transport.
    ///
    /// Quantizes the samples, encodes the bytes as text, and tags the
    /// result with the stated rate. Capture is single-channel, so this is
    /// the only packing constructor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use voicewire_core::AudioPayload;
    ///
    /// let payload = AudioPayload::from_mono(&[0.0, 0.5], 16000).unwrap();
    /// assert_eq!(payload.mime_type, "audio/pcm;rate=16000");
    /// ```
    pub fn from_mono(samples: &[f32], sample_rate: u32) -> Result<Self, InvalidSampleError> {
        let bytes = pcm::quantize_channel(samples)?;
        Ok(Self {
            data: encode_bytes(&bytes),
            mime_type: PcmFormat::new(sample_rate).mime_type(),
        })
    }

    /// Recovers the interleaved sample bytes from the `data` field.
    pub fn decode_data(&self) -> Result<Vec<u8>, MalformedEncodingError> {
        decode_bytes(&self.data)
    }

    /// Parses this payload's own format tag.
    pub fn pcm_format(&self) -> Result<PcmFormat, MimeFormatError> {
        PcmFormat::parse(&self.mime_type)
    }

    /// Opens the payload into playback-ready buffers.
    ///
    /// Decodes the text, parses the declared rate, and de-interleaves
    /// across `channel_count` channels. The tag convention does not carry
    /// a channel count, so the caller supplies one.
    pub fn to_frames(&self, channel_count: u32) -> Result<FrameBuffer, VoicewireError> {
        let bytes = self.decode_data()?;
        let format = self.pcm_format()?;
        let frames = pcm::dequantize_interleaved(&bytes, format.sample_rate, channel_count)?;
        Ok(frames)
    }

    /// Serializes to the JSON wire shape.
    pub fn to_json(&self) -> Result<String, VoicewireError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses the JSON wire shape.
    pub fn from_json(json: &str) -> Result<Self, VoicewireError> {
        Ok(serde_json::from_str(json)?)
    }
}
