//! Supersession rules: only the reply matching the latest dispatched
//! generation may mutate the outcome.

use std::sync::Once;

use slidecast_core::{update, Effect, FormState, Msg, ReplyKind, ResultView, SelectedFile};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn accepted(message: &str) -> ReplyKind {
    ReplyKind::Accepted {
        message: message.to_string(),
        artifact: None,
    }
}

fn submitted_form() -> (FormState, u64) {
    let state = FormState::new();
    let (state, _) = update(
        state,
        Msg::FileSelected(SelectedFile {
            name: "notes.txt".to_string(),
            content: b"notes".to_vec(),
        }),
    );
    let (state, effects) = update(state, Msg::SubmitClicked);
    let request_id = match effects.as_slice() {
        [Effect::SubmitUpload { request_id, .. }] => *request_id,
        other => panic!("expected one upload effect, got {other:?}"),
    };
    (state, request_id)
}

#[test]
fn reply_for_unknown_generation_is_ignored() {
    init_logging();
    let state = FormState::new();

    let (mut next, effects) = update(
        state.clone(),
        Msg::SubmitSettled {
            request_id: 7,
            reply: accepted("stray"),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert!(!next.consume_dirty());
}

#[test]
fn stale_reply_while_resubmitted_is_ignored() {
    init_logging();
    let (state, first_id) = submitted_form();
    // First request settles, the user submits again.
    let (state, _) = update(
        state,
        Msg::SubmitSettled {
            request_id: first_id,
            reply: ReplyKind::Rejected {
                message: "timed out".to_string(),
            },
        },
    );
    let (mut state, effects) = update(state, Msg::SubmitClicked);
    let second_id = match effects.as_slice() {
        [Effect::SubmitUpload { request_id, .. }] => *request_id,
        other => panic!("expected one upload effect, got {other:?}"),
    };
    assert_ne!(first_id, second_id);
    assert!(state.consume_dirty());

    // A duplicate of the first reply arrives late; it must not settle the
    // second request.
    let (mut state, effects) = update(
        state,
        Msg::SubmitSettled {
            request_id: first_id,
            reply: accepted("from the past"),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().result, ResultView::Pending);
    assert!(!state.consume_dirty());

    // The reply for the live generation still lands.
    let (state, _) = update(
        state,
        Msg::SubmitSettled {
            request_id: second_id,
            reply: accepted("fresh"),
        },
    );
    assert_eq!(
        state.view().result,
        ResultView::Ready {
            message: "fresh".to_string(),
            artifact: None,
        }
    );
}

#[test]
fn duplicate_reply_after_settle_is_ignored() {
    init_logging();
    let (state, request_id) = submitted_form();
    let (mut state, _) = update(
        state,
        Msg::SubmitSettled {
            request_id,
            reply: accepted("Done"),
        },
    );
    assert!(state.consume_dirty());
    let settled = state.clone();

    let (mut next, effects) = update(
        state,
        Msg::SubmitSettled {
            request_id,
            reply: ReplyKind::Rejected {
                message: "double delivery".to_string(),
            },
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next, settled);
    assert!(!next.consume_dirty());
}
