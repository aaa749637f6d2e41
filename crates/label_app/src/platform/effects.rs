use label_core::{Effect, FailureKind, Msg, PreviewFailure, PreviewRequest, PreviewResponse, PrintOutcome};
use label_engine::{ClientError, EngineConfig, EngineError, EngineEvent, EngineHandle, LabelRequest};
use label_logging::{label_debug, label_info, label_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Ok(Self::with_engine(EngineHandle::new(config)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RestartDebounce => {
                    label_debug!("RestartDebounce");
                    self.engine.restart_debounce();
                }
                Effect::RequestPreview { seq, request } => {
                    label_info!(
                        "RequestPreview seq={} text_len={} full={} small={}",
                        seq,
                        request.text.len(),
                        request.include_full_label,
                        request.include_small_label
                    );
                    self.engine.request_preview(seq, map_request(request));
                }
                Effect::SubmitPrint { request } => {
                    label_info!("SubmitPrint text_len={}", request.text.len());
                    self.engine.submit_print(map_request(request));
                }
            }
        }
    }

    /// Next engine event translated into a core message, if one is ready.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }
}

fn map_request(request: PreviewRequest) -> LabelRequest {
    LabelRequest {
        text: request.text,
        include_full_label: request.include_full_label,
        include_small_label: request.include_small_label,
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DebounceElapsed => Msg::DebounceElapsed,
        EngineEvent::PreviewCompleted {
            request_id,
            submitted_text,
            result,
        } => {
            let result = match result {
                Ok(labels) => {
                    if let Some(error) = &labels.error {
                        label_warn!("Preview {} rejected by server: {}", request_id, error);
                    }
                    Ok(PreviewResponse {
                        full_label_urls: labels.full_labels,
                        small_label_urls: labels.small_labels,
                        error: labels.error,
                    })
                }
                Err(err) => {
                    label_warn!("Preview {} failed: {}", request_id, err);
                    Err(PreviewFailure::new(map_kind(&err), err.to_string()))
                }
            };
            Msg::PreviewCompleted {
                seq: request_id,
                submitted_text,
                result,
            }
        }
        EngineEvent::PrintCompleted { timestamp, result } => {
            let outcome = match result {
                Ok(body) => PrintOutcome::Printed {
                    response: serde_json::to_string_pretty(&body)
                        .unwrap_or_else(|_| body.to_string()),
                },
                Err(err) => {
                    label_warn!("Print failed: {}", err);
                    PrintOutcome::Failed {
                        description: err.to_string(),
                    }
                }
            };
            Msg::PrintCompleted { timestamp, outcome }
        }
    }
}

fn map_kind(err: &ClientError) -> FailureKind {
    match err.kind() {
        label_engine::FailureKind::Network => FailureKind::Network,
        label_engine::FailureKind::Parse => FailureKind::Parse,
        label_engine::FailureKind::ServerReported => FailureKind::ServerReported,
    }
}
