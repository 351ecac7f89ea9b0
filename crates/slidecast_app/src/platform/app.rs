use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context;
use client_logging::{active_request, client_info, client_warn};
use slidecast_core::{update, FormState, FormViewModel, Lifecycle, Msg, SelectedFile};
use slidecast_engine::ServiceConfig;
use url::Url;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

pub struct AppArgs {
    pub file: PathBuf,
    pub question: String,
    pub base_url: Option<String>,
    pub log: LogDestination,
}

/// Drives one submission from file selection to a settled outcome and
/// returns the final view.
pub fn run_app(args: AppArgs) -> anyhow::Result<FormViewModel> {
    logging::initialize(args.log);

    let config = match &args.base_url {
        Some(raw) => {
            let base_url =
                Url::parse(raw).with_context(|| format!("invalid base url: {raw}"))?;
            ServiceConfig::with_base_url(base_url)
        }
        None => ServiceConfig::default(),
    };

    let content = fs::read(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let name = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document")
        .to_string();
    client_info!("selected {} ({} bytes)", name, content.len());

    let (msg_tx, msg_rx) = mpsc::channel();
    let runner = EffectRunner::new(config.clone(), msg_tx.clone());

    let _ = msg_tx.send(Msg::FileSelected(SelectedFile { name, content }));
    let _ = msg_tx.send(Msg::QuestionChanged(args.question));
    let _ = msg_tx.send(Msg::SubmitClicked);

    run_loop(msg_rx, runner, &config)
}

/// The Elm-style loop: apply each message, hand effects to the runner,
/// re-render when the state marked itself dirty, stop once settled.
fn run_loop(
    msg_rx: mpsc::Receiver<Msg>,
    runner: EffectRunner,
    config: &ServiceConfig,
) -> anyhow::Result<FormViewModel> {
    let mut state = FormState::new();
    loop {
        let msg = msg_rx
            .recv()
            .context("message channel closed before the submission settled")?;
        if let Msg::SubmitSettled { request_id, .. } = &msg {
            if *request_id != active_request() {
                client_warn!(
                    "discarding reply for superseded request {} (latest is {})",
                    request_id,
                    active_request()
                );
            }
        }

        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);

        if state.consume_dirty() {
            for line in ui::render::render(&state.view(), config) {
                println!("{line}");
            }
        }
        if state.lifecycle() == Lifecycle::Settled {
            return Ok(state.view());
        }
    }
}
