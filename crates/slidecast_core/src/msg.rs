#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a document in the file chooser.
    FileSelected(crate::SelectedFile),
    /// User edited the question box; replaces the previous text verbatim.
    QuestionChanged(String),
    /// User pressed the submit button.
    SubmitClicked,
    /// The platform settled the request identified by `request_id`.
    SubmitSettled {
        request_id: crate::RequestId,
        reply: ReplyKind,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// How the service answered, already reduced to what the form cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyKind {
    Accepted {
        message: String,
        artifact: Option<String>,
    },
    Rejected {
        message: String,
    },
}
