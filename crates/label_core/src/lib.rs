//! Label preview core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod preview;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{FailureKind, Msg, PreviewFailure, PreviewResponse, PrintOutcome};
pub use preview::{render_preview, FULL_LABEL_ALT, MISSING_LABEL_ALT, SMALL_LABEL_ALT};
pub use state::{AppState, PreviewRequest, RequestSeq};
pub use update::update;
pub use view_model::{
    AppViewModel, LabelImage, PreviewPairView, PrintLogEntry, PRINT_ERROR_MARKER,
    WAITING_FOR_RESPONSE,
};
