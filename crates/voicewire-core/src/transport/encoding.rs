//! Text-safe binary codec for transport payloads.
//!
//! Audio bytes travel inside JSON-shaped messages, so they are carried as
//! standard base64 text (64-symbol alphabet, `=` padding to a multiple of
//! four symbols). Encoding never fails; decoding rejects anything that is
//! not a canonical encoding instead of returning shortened or garbled
//! bytes.

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

/// The input text is not a canonical base64 encoding.
///
/// Raised only for caller input; the codec never retries or repairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedEncodingError {
    /// A character outside the encoding alphabet (plus padding).
    #[error("invalid symbol 0x{byte:02x} at offset {offset}")]
    InvalidSymbol { offset: usize, byte: u8 },

    /// The symbol count cannot be reassembled into whole bytes.
    #[error("encoded length of {length} symbols does not form whole bytes")]
    InvalidLength { length: usize },

    /// The trailing symbol carries bits no byte sequence produces.
    #[error("invalid final symbol 0x{byte:02x} at offset {offset}")]
    InvalidFinalSymbol { offset: usize, byte: u8 },

    /// Padding is absent, excessive, or interleaved with data symbols.
    #[error("invalid padding")]
    InvalidPadding,
}

impl From<base64::DecodeError> for MalformedEncodingError {
    fn from(err: base64::DecodeError) -> Self {
        match err {
            base64::DecodeError::InvalidByte(offset, byte) => Self::InvalidSymbol { offset, byte },
            base64::DecodeError::InvalidLength(length) => Self::InvalidLength { length },
            base64::DecodeError::InvalidLastSymbol(offset, byte) => {
                Self::InvalidFinalSymbol { offset, byte }
            }
            base64::DecodeError::InvalidPadding => Self::InvalidPadding,
        }
    }
}

/// Encodes arbitrary bytes as standard base64 text.
///
/// Deterministic, pure, and infallible; an empty slice encodes to an empty
/// string.
pub fn encode_bytes(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decodes standard base64 text back into the original bytes.
///
/// # Errors
///
/// Returns [`MalformedEncodingError`] when the text contains characters
/// outside the alphabet or its length/padding cannot reconstruct whole
/// bytes. Truncated or corrupted input fails the whole call; there is no
/// partial output.
pub fn decode_bytes(text: &str) -> Result<Vec<u8>, MalformedEncodingError> {
    general_purpose::STANDARD
        .decode(text)
        .map_err(MalformedEncodingError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_identity() {
        let cases: Vec<Vec<u8>> = vec![
            vec![],
            vec![0],
            vec![0xFF, 0x7F],
            vec![1, 2, 3],
            (0..16).collect(),
            vec![0xAB; 255],
        ];
        for bytes in cases {
            let text = encode_bytes(&bytes);
            assert_eq!(decode_bytes(&text).unwrap(), bytes);
        }
    }

    #[test]
    fn test_empty_input_encodes_to_empty_text() {
        assert_eq!(encode_bytes(&[]), "");
        assert_eq!(decode_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let bytes = b"deterministic";
        assert_eq!(encode_bytes(bytes), encode_bytes(bytes));
    }

    #[test]
    fn test_foreign_character_is_rejected() {
        let err = decode_bytes("QU D").unwrap_err();
        assert_eq!(
            err,
            MalformedEncodingError::InvalidSymbol {
                offset: 2,
                byte: b' '
            }
        );

        let err = decode_bytes("QU!D").unwrap_err();
        assert!(matches!(
            err,
            MalformedEncodingError::InvalidSymbol { byte: b'!', .. }
        ));
    }

    #[test]
    fn test_truncated_text_is_rejected() {
        // Dropping symbols or padding from a canonical encoding must fail,
        // never yield a shortened byte sequence.
        for text in ["Q", "QQ", "QUJ", "QUJDRA="] {
            assert!(decode_bytes(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_canonical_text_reencodes_identically() {
        for text in ["QUJDRA==", "QUJD", "AAD/fw=="] {
            let bytes = decode_bytes(text).unwrap();
            assert_eq!(encode_bytes(&bytes), text);
        }
    }

    #[test]
    fn test_error_display_names_the_offender() {
        let err = decode_bytes("QU D").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("0x20"), "message was {msg}");
        assert!(msg.contains("offset 2"), "message was {msg}");
    }
}
