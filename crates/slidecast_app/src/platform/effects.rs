use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_error, client_info, client_warn, set_active_request};
use slidecast_core::{is_advised_extension, Effect, Msg, ReplyKind};
use slidecast_engine::{EngineEvent, EngineHandle, FailureKind, ServiceConfig, UploadRequest};

/// Executes core effects against the engine and feeds completions back into
/// the message loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: ServiceConfig, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(config);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitUpload {
                    request_id,
                    file,
                    question,
                } => {
                    set_active_request(request_id);
                    if !is_advised_extension(&file.name) {
                        // Advisory only; the service decides acceptance.
                        client_warn!("{} is outside the advertised extensions", file.name);
                    }
                    client_info!(
                        "submit request_id={} file={} ({} bytes) question_len={}",
                        request_id,
                        file.name,
                        file.content.len(),
                        question.len()
                    );
                    self.engine.submit(
                        request_id,
                        UploadRequest {
                            file_name: file.name,
                            content: file.content,
                            question,
                        },
                    );
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let EngineEvent::SubmitCompleted { request_id, result } = event;
                let reply = match result {
                    Ok(reply) => {
                        client_info!("request {} accepted: {}", request_id, reply.message);
                        ReplyKind::Accepted {
                            message: reply.message,
                            artifact: reply.video_path,
                        }
                    }
                    Err(err) => {
                        match err.kind {
                            FailureKind::MalformedBody => client_error!(
                                "request {} returned an unreadable body: {}",
                                request_id,
                                err
                            ),
                            _ => {
                                client_warn!("request {} failed ({}): {}", request_id, err.kind, err)
                            }
                        }
                        ReplyKind::Rejected {
                            message: err.to_string(),
                        }
                    }
                };
                if msg_tx
                    .send(Msg::SubmitSettled { request_id, reply })
                    .is_err()
                {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}
