//! Payload encoding for on-chain fields.
//!
//! Every binary field a gateway accepts (`data`, `owner`, tag names and
//! values) travels as URL-safe base64 without padding. [`PayloadCodec`] is
//! the seam the finalizer encodes through; [`Base64UrlCodec`] is the only
//! encoding the network speaks today.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid base64url input: {0}")]
    InvalidBase64(String),

    #[error("decoded payload is not valid UTF-8")]
    InvalidUtf8,
}

/// A base64url string as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Base64Url(String);

impl Base64Url {
    /// Wraps an already-encoded string. No validation happens here; decoding
    /// is where malformed input surfaces.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Base64Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts payloads to and from their on-chain representation.
pub trait PayloadCodec: Send + Sync {
    /// Encodes UTF-8 text.
    fn encode_text(&self, text: &str) -> Base64Url {
        self.encode_bytes(text.as_bytes())
    }

    /// Encodes raw bytes (ciphertext, digests).
    fn encode_bytes(&self, raw: &[u8]) -> Base64Url;

    /// Decodes an on-chain field back to bytes.
    fn decode(&self, encoded: &Base64Url) -> Result<Vec<u8>, CodecError>;

    /// Decodes an on-chain field back to UTF-8 text.
    fn decode_text(&self, encoded: &Base64Url) -> Result<String, CodecError> {
        String::from_utf8(self.decode(encoded)?).map_err(|_| CodecError::InvalidUtf8)
    }
}

/// URL-safe base64 without padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64UrlCodec;

impl PayloadCodec for Base64UrlCodec {
    fn encode_bytes(&self, raw: &[u8]) -> Base64Url {
        Base64Url(b64url_encode(raw))
    }

    fn decode(&self, encoded: &Base64Url) -> Result<Vec<u8>, CodecError> {
        b64url_decode(encoded.as_str())
    }
}

/// Encodes bytes as unpadded base64url.
pub fn b64url_encode(raw: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(raw)
}

/// Decodes base64url, with or without trailing `=` padding.
///
/// Wallet exports are inconsistent about padding, so both forms are
/// accepted.
pub fn b64url_decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    let result = if encoded.ends_with('=') {
        URL_SAFE.decode(encoded)
    } else {
        URL_SAFE_NO_PAD.decode(encoded)
    };
    result.map_err(|e| CodecError::InvalidBase64(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_text_is_unpadded_url_safe() {
        let codec = Base64UrlCodec;
        assert_eq!(codec.encode_text("hello").as_str(), "aGVsbG8");
        // 0xfb 0xff encodes to "+/8=" in standard base64.
        assert_eq!(codec.encode_bytes(&[0xfb, 0xff]).as_str(), "-_8");
    }

    #[test]
    fn decode_text_recovers_input() {
        let codec = Base64UrlCodec;
        let encoded = codec.encode_text("permanent ✓");
        assert_eq!(codec.decode_text(&encoded).unwrap(), "permanent ✓");
    }

    #[test]
    fn decode_accepts_padding() {
        assert_eq!(b64url_decode("aGVsbG8=").unwrap(), b"hello");
        assert_eq!(b64url_decode("aGVsbG8").unwrap(), b"hello");
    }

    #[test]
    fn decode_rejects_standard_alphabet() {
        assert!(matches!(
            b64url_decode("+/8"),
            Err(CodecError::InvalidBase64(_))
        ));
    }

    #[test]
    fn decode_text_rejects_invalid_utf8() {
        let codec = Base64UrlCodec;
        let encoded = codec.encode_bytes(&[0xff, 0xfe, 0xfd]);
        assert_eq!(codec.decode_text(&encoded), Err(CodecError::InvalidUtf8));
    }

    #[test]
    fn empty_payload_encodes_to_empty_string() {
        assert!(Base64UrlCodec.encode_bytes(&[]).is_empty());
    }
}
