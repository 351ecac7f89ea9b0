use crate::{Effect, FormState, Lifecycle, Msg, Outcome, ReplyKind};

/// Shown when submit is pressed with no document selected. Surfaced as a
/// local failure; no request leaves the client.
pub const MISSING_FILE_MESSAGE: &str = "Select a document before submitting.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileSelected(file) => {
            state.set_file(file);
            Vec::new()
        }
        Msg::QuestionChanged(text) => {
            state.set_question(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // One submission in flight at a time; further clicks are inert
            // until the current one settles.
            if state.lifecycle() == Lifecycle::Submitting {
                return (state, Vec::new());
            }
            match state.begin_submission() {
                Some((request_id, file, question)) => vec![Effect::SubmitUpload {
                    request_id,
                    file,
                    question,
                }],
                None => {
                    state.settle(Outcome::Failure {
                        message: MISSING_FILE_MESSAGE.to_string(),
                    });
                    Vec::new()
                }
            }
        }
        Msg::SubmitSettled { request_id, reply } => {
            // A reply from a superseded generation must never overwrite
            // newer state.
            if !state.matches_in_flight(request_id) {
                return (state, Vec::new());
            }
            state.settle(match reply {
                ReplyKind::Accepted { message, artifact } => Outcome::Success { message, artifact },
                ReplyKind::Rejected { message } => Outcome::Failure { message },
            });
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
