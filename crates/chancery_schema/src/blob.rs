//! Attachment storage behind an opaque reference.
//!
//! File inputs arrive as base64 payloads (browser-style data URLs
//! included). Records store a `blob:<uuid>` reference instead of the bytes,
//! so a real storage backend can replace [`MemoryBlobStore`] without
//! touching the form contract.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

const REF_PREFIX: &str = "blob:";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlobError {
    #[error("unknown blob reference: {0}")]
    Unknown(String),
    #[error("payload is not valid base64")]
    InvalidPayload,
    #[error("not a blob reference: {0}")]
    InvalidReference(String),
}

/// Opaque handle to a stored attachment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobRef(String);

impl BlobRef {
    fn mint() -> Self {
        Self(format!("{REF_PREFIX}{}", Uuid::new_v4()))
    }

    pub fn parse(value: &str) -> Result<Self, BlobError> {
        if value.starts_with(REF_PREFIX) {
            Ok(Self(value.to_string()))
        } else {
            Err(BlobError::InvalidReference(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store/retrieve-by-reference contract for attachments.
pub trait BlobStore {
    /// Store a base64 payload (data-URL prefix already stripped) under a
    /// fresh reference.
    fn store(&mut self, name: &str, payload_base64: &str) -> Result<BlobRef, BlobError>;

    /// Decode the payload behind a reference.
    fn retrieve(&self, reference: &BlobRef) -> Result<Vec<u8>, BlobError>;
}

#[derive(Debug, Clone)]
struct StoredBlob {
    name: String,
    payload_base64: String,
}

/// Process-local blob store; contents are lost on exit, like every other
/// collection in this system.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<BlobRef, StoredBlob>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn name_of(&self, reference: &BlobRef) -> Option<&str> {
        self.blobs.get(reference).map(|blob| blob.name.as_str())
    }
}

impl BlobStore for MemoryBlobStore {
    fn store(&mut self, name: &str, payload_base64: &str) -> Result<BlobRef, BlobError> {
        let payload = strip_data_url(payload_base64);
        // Reject garbage up front rather than on first retrieve.
        STANDARD
            .decode(payload)
            .map_err(|_| BlobError::InvalidPayload)?;
        let reference = BlobRef::mint();
        self.blobs.insert(
            reference.clone(),
            StoredBlob {
                name: name.to_string(),
                payload_base64: payload.to_string(),
            },
        );
        Ok(reference)
    }

    fn retrieve(&self, reference: &BlobRef) -> Result<Vec<u8>, BlobError> {
        let blob = self
            .blobs
            .get(reference)
            .ok_or_else(|| BlobError::Unknown(reference.to_string()))?;
        STANDARD
            .decode(&blob.payload_base64)
            .map_err(|_| BlobError::InvalidPayload)
    }
}

/// Strip a `data:<mime>;base64,` prefix when present.
pub fn strip_data_url(input: &str) -> &str {
    if !input.starts_with("data:") {
        return input;
    }
    match input.split_once(";base64,") {
        Some((_, payload)) => payload,
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_retrieve_roundtrip() {
        let mut store = MemoryBlobStore::new();
        let payload = STANDARD.encode(b"curriculum vitae");
        let reference = store.store("cv.pdf", &payload).unwrap();
        assert_eq!(store.retrieve(&reference).unwrap(), b"curriculum vitae");
        assert_eq!(store.name_of(&reference), Some("cv.pdf"));
    }

    #[test]
    fn data_url_prefix_is_stripped() {
        let mut store = MemoryBlobStore::new();
        let payload = format!("data:application/pdf;base64,{}", STANDARD.encode(b"doc"));
        let reference = store.store("doc.pdf", &payload).unwrap();
        assert_eq!(store.retrieve(&reference).unwrap(), b"doc");
    }

    #[test]
    fn invalid_payload_is_rejected_on_store() {
        let mut store = MemoryBlobStore::new();
        assert_eq!(
            store.store("x", "not base64!!!"),
            Err(BlobError::InvalidPayload)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_reference_errors() {
        let store = MemoryBlobStore::new();
        let reference = BlobRef::parse("blob:0000").unwrap();
        assert!(matches!(
            store.retrieve(&reference),
            Err(BlobError::Unknown(_))
        ));
        assert!(BlobRef::parse("file.pdf").is_err());
    }
}
