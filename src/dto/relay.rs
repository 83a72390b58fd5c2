//! Boundary types of the assistant relay.

use actix_web::web::Bytes;

/// Request body forwarded to the workflow webhook.
///
/// Opaque payload, not validated: the bytes are passed through untouched and
/// nothing in this crate may assume a structure for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpaquePayload(Vec<u8>);

impl OpaquePayload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for OpaquePayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for OpaquePayload {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Upstream answer relayed verbatim to the caller.
///
/// The body is kept as raw bytes; it is never decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}
