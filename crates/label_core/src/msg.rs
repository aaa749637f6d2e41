use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the label text (whole buffer, not a diff).
    InputChanged(String),
    /// User toggled the "print full label" checkbox.
    FullLabelToggled(bool),
    /// User toggled the "print small label" checkbox.
    SmallLabelToggled(bool),
    /// The debounce window elapsed with no further input.
    DebounceElapsed,
    /// A preview request finished, successfully or not.
    PreviewCompleted {
        seq: crate::RequestSeq,
        submitted_text: String,
        result: Result<PreviewResponse, PreviewFailure>,
    },
    /// User clicked Print.
    PrintClicked,
    /// A print request finished; `timestamp` is taken at completion.
    PrintCompleted {
        timestamp: String,
        outcome: PrintOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Decoded `/previewLabels` body. Entries are looked up by raw line index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewResponse {
    pub full_label_urls: Vec<Option<String>>,
    pub small_label_urls: Vec<Option<String>>,
    pub error: Option<String>,
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
            FailureKind::Network => write!(f, "network failure"),
            FailureKind::Parse => write!(f, "parse failure"),
            FailureKind::ServerReported => write!(f, "server reported error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl PreviewFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// Server accepted the job; `response` is the body rendered for display.
    Printed { response: String },
    Failed { description: String },
}
