//! Transport-side concerns: the text-safe codec, the payload record, and
//! the format tag convention.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`encoding`] | base64 codec between bytes and transport text |
//! | [`payload`] | `AudioPayload`, the `{data, mimeType}` record |
//! | [`mime`] | the `audio/pcm;rate=<hz>` format tag |

pub mod encoding;
pub mod mime;
pub mod payload;

pub use encoding::{decode_bytes, encode_bytes, MalformedEncodingError};
pub use mime::{MimeFormatError, PcmFormat, PCM_MIME_ESSENCE};
pub use payload::AudioPayload;
