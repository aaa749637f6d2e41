use crate::view_model::{AppViewModel, PreviewPairView, PrintLogEntry};

/// Number assigned to each outgoing preview request, starting at 1.
pub type RequestSeq = u64;

/// Body of both `/previewLabels` and `/printLabels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub text: String,
    pub include_full_label: bool,
    pub include_small_label: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    text: String,
    include_full_label: bool,
    include_small_label: bool,
    pairs: Vec<PreviewPairView>,
    status: Option<String>,
    waiting: String,
    print_log: Vec<PrintLogEntry>,
    last_issued_seq: RequestSeq,
    last_applied_seq: RequestSeq,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            text: String::new(),
            include_full_label: true,
            include_small_label: true,
            pairs: Vec::new(),
            status: None,
            waiting: String::new(),
            print_log: Vec::new(),
            last_issued_seq: 0,
            last_applied_seq: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            text: self.text.clone(),
            include_full_label: self.include_full_label,
            include_small_label: self.include_small_label,
            pairs: self.pairs.clone(),
            status: self.status.clone(),
            waiting: self.waiting.clone(),
            print_log: self.print_log.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn last_issued_seq(&self) -> RequestSeq {
        self.last_issued_seq
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_text(&mut self, text: String) {
        if self.text != text {
            self.text = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_include_full_label(&mut self, include: bool) {
        if self.include_full_label != include {
            self.include_full_label = include;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_include_small_label(&mut self, include: bool) {
        if self.include_small_label != include {
            self.include_small_label = include;
            self.mark_dirty();
        }
    }

    /// Snapshot of the current UI inputs as an outgoing request.
    pub(crate) fn current_request(&self) -> PreviewRequest {
        PreviewRequest {
            text: self.text.clone(),
            include_full_label: self.include_full_label,
            include_small_label: self.include_small_label,
        }
    }

    pub(crate) fn issue_preview_seq(&mut self) -> RequestSeq {
        self.last_issued_seq += 1;
        self.last_issued_seq
    }

    /// Accepts `seq` unless a newer completion was already applied.
    pub(crate) fn accept_completion(&mut self, seq: RequestSeq) -> bool {
        if seq <= self.last_applied_seq {
            return false;
        }
        self.last_applied_seq = seq;
        true
    }

    pub(crate) fn replace_pairs(&mut self, pairs: Vec<PreviewPairView>) {
        self.pairs = pairs;
        self.mark_dirty();
    }

    pub(crate) fn set_status(&mut self, status: String) {
        self.status = Some(status);
        self.mark_dirty();
    }

    pub(crate) fn set_waiting(&mut self, waiting: impl Into<String>) {
        self.waiting = waiting.into();
        self.mark_dirty();
    }

    pub(crate) fn prepend_log_entry(&mut self, entry: PrintLogEntry) {
        self.print_log.insert(0, entry);
        self.mark_dirty();
    }
}
