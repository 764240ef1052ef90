use thiserror::Error;

/// Failure reported by the remote lookup endpoint.
///
/// Carried verbatim to observers; the committed result list keeps its last
/// good contents when one of these arrives.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("sharee lookup failed with status {status_code}: {message}")]
pub struct TransportError {
    pub status_code: i32,
    pub message: String,
}

impl TransportError {
    #[must_use]
    pub fn new(status_code: i32, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }
}
