use std::fmt;

use serde::Deserialize;

/// Generation counter identifying one dispatched submission.
pub type RequestId = u64;

/// Success body returned by the generation service. `message` is always
/// present; `video_path` only when a video was produced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceReply {
    pub message: String,
    #[serde(default)]
    pub video_path: Option<String>,
}

/// One document plus question headed for the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_name: String,
    pub content: Vec<u8>,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SubmitError {
    pub kind: FailureKind,
    /// Human-readable, suitable for showing to the user as-is.
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection refused, reset, DNS failure and the like.
    Network,
    Timeout,
    /// The service answered with a non-2xx status.
    HttpStatus(u16),
    /// A 2xx answer whose body did not have the expected shape.
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmitCompleted {
        request_id: RequestId,
        result: Result<ServiceReply, SubmitError>,
    },
}
