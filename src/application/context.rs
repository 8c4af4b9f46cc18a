// src/application/context.rs
//! Per-call metadata created by the request pipeline and passed by reference
//! through every service and outbound client of that call.
use std::fmt;
use uuid::Uuid;

/// Header used both inbound and on outbound calls to carry the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Accepts a caller-supplied id if it is non-blank, at most 128 chars and
    /// made of visible ASCII only.
    pub fn from_header(value: &str) -> Option<Self> {
        let value = value.trim();
        let valid = !value.is_empty()
            && value.len() <= MAX_REQUEST_ID_LEN
            && value.bytes().all(|b| b.is_ascii_graphic());
        valid.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: RequestId,
}

impl RequestContext {
    pub const fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    pub fn generate() -> Self {
        Self::new(RequestId::generate())
    }

    pub const fn request_id(&self) -> &RequestId {
        &self.request_id
    }
}
