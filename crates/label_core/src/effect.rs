use crate::{PreviewRequest, RequestSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cancel any pending debounce timer and start a new one.
    RestartDebounce,
    RequestPreview {
        seq: RequestSeq,
        request: PreviewRequest,
    },
    SubmitPrint { request: PreviewRequest },
}
