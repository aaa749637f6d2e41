use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type RequestId = u64;

/// Request body shared by the preview and print endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRequest {
    pub text: String,
    pub include_full_label: bool,
    pub include_small_label: bool,
}

impl LabelRequest {
    pub(crate) fn envelope(&self) -> RequestEnvelope<'_> {
        RequestEnvelope {
            data: RequestData {
                text: &self.text,
                should_print_full_label: self.include_full_label,
                should_print_small_label: self.include_small_label,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestEnvelope<'a> {
    data: RequestData<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestData<'a> {
    text: &'a str,
    should_print_full_label: bool,
    should_print_small_label: bool,
}

/// Body of a successful `/previewLabels` response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PreviewLabels {
    #[serde(default)]
    pub full_labels: Vec<Option<String>>,
    #[serde(default)]
    pub small_labels: Vec<Option<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body the server sends alongside failing status codes.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The debounce window elapsed without another reset.
    DebounceElapsed,
    PreviewCompleted {
        request_id: RequestId,
        submitted_text: String,
        result: Result<PreviewLabels, ClientError>,
    },
    PrintCompleted {
        timestamp: String,
        result: Result<serde_json::Value, ClientError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("{0}")]
    ServerReported(String),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("invalid response body: {0}")]
    Parse(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::HttpStatus(_)
            | ClientError::Timeout
            | ClientError::Network(_)
            | ClientError::TooLarge { .. } => FailureKind::Network,
            ClientError::ServerReported(_) => FailureKind::ServerReported,
            ClientError::Parse(_) | ClientError::Encode(_) => FailureKind::Parse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Parse,
    ServerReported,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network"),
            FailureKind::Parse => write!(f, "parse"),
            FailureKind::ServerReported => write!(f, "server reported"),
        }
    }
}
