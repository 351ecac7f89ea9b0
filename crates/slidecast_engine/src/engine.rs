use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::client::{ReqwestSubmitClient, SubmitClient};
use crate::{EngineEvent, RequestId, ServiceConfig, UploadRequest};

enum EngineCommand {
    Submit {
        request_id: RequestId,
        request: UploadRequest,
    },
}

/// Bridges the synchronous update loop to the async submit client. Commands
/// go in over a channel, completions come back as events. Clones share the
/// same channels.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: ServiceConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestSubmitClient::new(config));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn submit(&self, request_id: RequestId, request: UploadRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            request_id,
            request,
        });
    }

    /// Non-blocking; `None` when no completion is pending.
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn SubmitClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            request_id,
            request,
        } => {
            let result = client.submit(&request).await;
            // A torn-down receiver simply drops the completion; nothing to
            // mutate once the owner is gone.
            let _ = event_tx.send(EngineEvent::SubmitCompleted { request_id, result });
        }
    }
}
