//! Slidecast core: pure submission state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, ReplyKind};
pub use state::{
    is_advised_extension, FormState, Lifecycle, Outcome, RequestId, SelectedFile,
    ADVISORY_EXTENSIONS,
};
pub use update::{update, MISSING_FILE_MESSAGE};
pub use view_model::{FormViewModel, ResultView};
