use slidecast_core::{update, FormState, Msg};

#[test]
fn update_is_noop() {
    let state = FormState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
