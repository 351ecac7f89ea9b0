use slidecast_core::{
    is_advised_extension, update, FormState, FormViewModel, Msg, ReplyKind, ResultView,
    SelectedFile,
};

fn settled_state() -> FormState {
    let state = FormState::new();
    let (state, _) = update(
        state,
        Msg::FileSelected(SelectedFile {
            name: "notes.pdf".to_string(),
            content: vec![1, 2, 3],
        }),
    );
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::SubmitSettled {
            request_id: 1,
            reply: ReplyKind::Accepted {
                message: "Done".to_string(),
                artifact: None,
            },
        },
    );
    state
}

#[test]
fn default_view_is_hidden_and_enabled() {
    let view = FormState::new().view();
    assert_eq!(view, FormViewModel::default());
    assert_eq!(view.result, ResultView::Hidden);
    assert!(view.submit_enabled);
}

#[test]
fn view_is_a_pure_projection() {
    let state = settled_state();
    assert_eq!(state.view(), state.view());
}

#[test]
fn success_without_artifact_shows_message_alone() {
    let view = settled_state().view();
    assert_eq!(
        view.result,
        ResultView::Ready {
            message: "Done".to_string(),
            artifact: None,
        }
    );
}

#[test]
fn pending_view_disables_submit_and_carries_no_message() {
    let state = FormState::new();
    let (state, _) = update(
        state,
        Msg::FileSelected(SelectedFile {
            name: "notes.txt".to_string(),
            content: b"x".to_vec(),
        }),
    );
    let (state, _) = update(state, Msg::SubmitClicked);

    let view = state.view();
    assert_eq!(view.result, ResultView::Pending);
    assert!(!view.submit_enabled);
}

#[test]
fn advisory_extension_list_matches_case_insensitively() {
    assert!(is_advised_extension("notes.pdf"));
    assert!(is_advised_extension("NOTES.TXT"));
    assert!(!is_advised_extension("clip.mp4"));
    assert!(!is_advised_extension("no_extension"));
}
