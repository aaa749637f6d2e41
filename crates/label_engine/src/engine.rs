use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use label_logging::{label_debug, label_info};
use thiserror::Error;

use crate::client::{ClientSettings, LabelClient, ReqwestLabelClient};
use crate::debounce::Debouncer;
use crate::{ClientError, EngineEvent, LabelRequest, RequestId};

/// Produces the timestamp recorded for each completed print.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
pub struct EngineConfig {
    pub client: ClientSettings,
    pub debounce_delay: Duration,
    pub clock: Clock,
}

impl EngineConfig {
    pub fn new(client: ClientSettings) -> Self {
        Self {
            client,
            debounce_delay: Duration::from_millis(2000),
            clock: Arc::new(|| chrono::Utc::now().to_rfc3339()),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ClientError),
}

enum EngineCommand {
    RestartDebounce,
    Preview {
        request_id: RequestId,
        request: LabelRequest,
    },
    Print {
        request: LabelRequest,
    },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let client = ReqwestLabelClient::new(config.client.clone())?;
        Self::with_client(config, Arc::new(client))
    }

    /// Starts the engine thread around an arbitrary client.
    pub fn with_client(
        config: EngineConfig,
        client: Arc<dyn LabelClient>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        label_info!(
            "Engine starting: server={} debounce={:?}",
            config.client.base_url,
            config.debounce_delay
        );

        thread::spawn(move || {
            let mut debouncer = Debouncer::new(config.debounce_delay, runtime.handle().clone());
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::RestartDebounce => {
                        let event_tx = event_tx.clone();
                        debouncer.reset(move || {
                            let _ = event_tx.send(EngineEvent::DebounceElapsed);
                        });
                    }
                    EngineCommand::Preview {
                        request_id,
                        request,
                    } => {
                        let client = client.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = client.preview_labels(&request).await;
                            label_debug!("Preview {} completed ok={}", request_id, result.is_ok());
                            let _ = event_tx.send(EngineEvent::PreviewCompleted {
                                request_id,
                                submitted_text: request.text,
                                result,
                            });
                        });
                    }
                    EngineCommand::Print { request } => {
                        let client = client.clone();
                        let event_tx = event_tx.clone();
                        let clock = config.clock.clone();
                        runtime.spawn(async move {
                            let result = client.print_labels(&request).await;
                            let _ = event_tx.send(EngineEvent::PrintCompleted {
                                timestamp: clock(),
                                result,
                            });
                        });
                    }
                }
            }
            label_debug!("Engine command channel closed; shutting down");
            drop(debouncer);
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn restart_debounce(&self) {
        let _ = self.cmd_tx.send(EngineCommand::RestartDebounce);
    }

    pub fn request_preview(&self, request_id: RequestId, request: LabelRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Preview {
            request_id,
            request,
        });
    }

    pub fn submit_print(&self, request: LabelRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Print { request });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}
