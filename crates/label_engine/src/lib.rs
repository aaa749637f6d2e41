//! Label engine: HTTP client, debounce timer and effect execution.
mod client;
mod debounce;
mod engine;
mod types;

pub use client::{ClientSettings, LabelClient, ReqwestLabelClient, PREVIEW_PATH, PRINT_PATH};
pub use debounce::Debouncer;
pub use engine::{Clock, EngineConfig, EngineError, EngineHandle};
pub use types::{ClientError, EngineEvent, FailureKind, LabelRequest, PreviewLabels, RequestId};
pub use url::{ParseError, Url};
