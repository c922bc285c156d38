//! Image payload exchanged with the external analysis service.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// A captured or uploaded receipt image, carried as a
/// `data:<mime>;base64,<payload>` URL string.
///
/// This is the exact shape the analysis service accepts, so the payload
/// is kept in wire form and only decoded on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePayload(String);

impl ImagePayload {
    /// Wraps an existing data-URL string without validating it.
    #[must_use]
    pub fn new(data_url: impl Into<String>) -> Self {
        Self(data_url.into())
    }

    /// Encodes raw image bytes into a data URL with the given MIME type.
    #[must_use]
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    /// Returns the full data-URL string.
    #[must_use]
    pub fn as_data_url(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the payload carries no data at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes the base64 payload back into raw image bytes.
    ///
    /// A `data:...;base64,` prefix is stripped if present; a bare base64
    /// string is accepted as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ImageDecodeError`] if the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, ImageDecodeError> {
        let encoded = self
            .0
            .split_once(',')
            .map_or(self.0.as_str(), |(_, rest)| rest);
        STANDARD
            .decode(encoded)
            .map_err(|source| ImageDecodeError { source })
    }
}

/// Error returned when an [`ImagePayload`] does not contain valid base64.
#[derive(Debug)]
pub struct ImageDecodeError {
    source: base64::DecodeError,
}

impl std::fmt::Display for ImageDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid base64 image payload: {}", self.source)
    }
}

impl std::error::Error for ImageDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_bytes_through_data_url() {
        let payload = ImagePayload::from_bytes("image/jpeg", b"\xff\xd8\xff\xe0");
        assert!(payload.as_data_url().starts_with("data:image/jpeg;base64,"));
        assert_eq!(payload.decode().unwrap(), b"\xff\xd8\xff\xe0");
    }

    #[test]
    fn decodes_bare_base64_without_prefix() {
        let payload = ImagePayload::new("aGVsbG8=");
        assert_eq!(payload.decode().unwrap(), b"hello");
    }

    #[test]
    fn rejects_garbage_payload() {
        let payload = ImagePayload::new("data:image/png;base64,!!!not-base64!!!");
        assert!(payload.decode().is_err());
    }

    #[test]
    fn empty_payload_is_detected() {
        assert!(ImagePayload::new("").is_empty());
        assert!(!ImagePayload::new("data:image/png;base64,").is_empty());
    }
}
