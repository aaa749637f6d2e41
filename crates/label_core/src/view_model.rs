/// Shown in the waiting indicator while a print request is in flight.
pub const WAITING_FOR_RESPONSE: &str = "Waiting for response...";
/// Shown in the waiting indicator after a print request failed.
pub const PRINT_ERROR_MARKER: &str = "!!! ERROR !!!";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub text: String,
    pub include_full_label: bool,
    pub include_small_label: bool,
    pub pairs: Vec<PreviewPairView>,
    /// Last preview error, if any. Overwritten, never accumulated.
    pub status: Option<String>,
    /// Busy/error indicator for the print action; empty when idle.
    pub waiting: String,
    /// Newest first.
    pub print_log: Vec<PrintLogEntry>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPairView {
    pub heading: String,
    /// Raw index of the source line in the submitted text.
    pub line_index: usize,
    pub full: LabelImage,
    pub small: LabelImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelImage {
    /// Image source; empty when the server returned nothing for the line.
    pub src: String,
    pub alt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintLogEntry {
    pub timestamp: String,
    pub payload: String,
}

impl PrintLogEntry {
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.timestamp, self.payload)
    }
}
