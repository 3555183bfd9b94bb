use std::fmt;

use reclami_core::ComplaintRecord;
pub use reclami_core::RequestId;

/// Shown for any non-success HTTP status; the response body is not consulted.
pub const REQUEST_FAILED_MESSAGE: &str = "Errore nella chiamata API";

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<Vec<ComplaintRecord>, SearchError>,
    },
}

/// A failed search. `message` is what the user gets to read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SearchError {
    pub kind: FailureKind,
    pub message: String,
}

impl SearchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn request_failed(status: u16) -> Self {
        Self::new(FailureKind::RequestFailed { status }, REQUEST_FAILED_MESSAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    RequestFailed { status: u16 },
    ParseFailed,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::RequestFailed { status } => write!(f, "request failed with status {status}"),
            FailureKind::ParseFailed => write!(f, "unparseable response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
