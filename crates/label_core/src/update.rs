use crate::{
    render_preview, AppState, Effect, Msg, PrintLogEntry, PrintOutcome, PRINT_ERROR_MARKER,
    WAITING_FOR_RESPONSE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_text(text);
            vec![Effect::RestartDebounce]
        }
        Msg::FullLabelToggled(include) => {
            state.set_include_full_label(include);
            Vec::new()
        }
        Msg::SmallLabelToggled(include) => {
            state.set_include_small_label(include);
            Vec::new()
        }
        Msg::DebounceElapsed => {
            // Flags and text are read at firing time, not at the last keystroke.
            let seq = state.issue_preview_seq();
            vec![Effect::RequestPreview {
                seq,
                request: state.current_request(),
            }]
        }
        Msg::PreviewCompleted {
            seq,
            submitted_text,
            result,
        } => {
            if !state.accept_completion(seq) {
                return (state, Vec::new());
            }
            match result {
                Ok(response) => match response.error.as_deref() {
                    Some(error) => state.set_status(format!("Error: {error}")),
                    None => state.replace_pairs(render_preview(&response, &submitted_text)),
                },
                Err(failure) => state.set_status(format!("Error: {}", failure.message)),
            }
            Vec::new()
        }
        Msg::PrintClicked => {
            state.set_waiting(WAITING_FOR_RESPONSE);
            vec![Effect::SubmitPrint {
                request: state.current_request(),
            }]
        }
        Msg::PrintCompleted { timestamp, outcome } => {
            let payload = match outcome {
                PrintOutcome::Printed { response } => {
                    state.set_waiting(String::new());
                    response
                }
                PrintOutcome::Failed { description } => {
                    state.set_waiting(PRINT_ERROR_MARKER);
                    format!("Error: {description}")
                }
            };
            state.prepend_log_entry(PrintLogEntry { timestamp, payload });
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
