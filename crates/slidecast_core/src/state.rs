use crate::view_model::{FormViewModel, ResultView};

/// Generation counter identifying one dispatched submission.
pub type RequestId = u64;

/// Extensions the file chooser advertises. Advisory only: the generation
/// service is the authority on what it accepts, so selection is never
/// blocked on this list.
pub const ADVISORY_EXTENSIONS: [&str; 2] = ["txt", "pdf"];

/// Whether `file_name` carries one of the advertised extensions.
pub fn is_advised_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| {
            ADVISORY_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}

/// The document chosen for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

/// Where the form is in its request/response cycle. Moves only forward,
/// except `Settled -> Submitting` when the user submits again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Submitting,
    Settled,
}

/// Terminal result of one submission. Valid only while `Settled`; replaced
/// by the next submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        message: String,
        /// Server-relative identifier of the produced video, when one exists.
        artifact: Option<String>,
    },
    Failure {
        message: String,
    },
}

/// State of one submission form. One instance per form; nothing here is
/// shared or global, so multiple forms on a page cannot interfere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    file: Option<SelectedFile>,
    question: String,
    lifecycle: Lifecycle,
    outcome: Option<Outcome>,
    next_request: RequestId,
    in_flight: Option<RequestId>,
    dirty: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            file: None,
            question: String::new(),
            lifecycle: Lifecycle::Idle,
            outcome: None,
            next_request: 1,
            in_flight: None,
            dirty: false,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Projects the state into what the user should see.
    pub fn view(&self) -> FormViewModel {
        let result = match (self.lifecycle, &self.outcome) {
            (Lifecycle::Idle, _) | (Lifecycle::Settled, None) => ResultView::Hidden,
            (Lifecycle::Submitting, _) => ResultView::Pending,
            (Lifecycle::Settled, Some(Outcome::Success { message, artifact })) => {
                ResultView::Ready {
                    message: message.clone(),
                    artifact: artifact.clone(),
                }
            }
            (Lifecycle::Settled, Some(Outcome::Failure { message })) => ResultView::Error {
                message: message.clone(),
            },
        };
        FormViewModel {
            file_name: self.file.as_ref().map(|file| file.name.clone()),
            question: self.question.clone(),
            submit_enabled: self.lifecycle != Lifecycle::Submitting,
            result,
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
        self.dirty = true;
    }

    pub(crate) fn set_question(&mut self, text: String) {
        self.question = text;
        self.dirty = true;
    }

    /// Opens a new submission generation, superseding any prior one.
    /// Returns `None` when no file is selected.
    pub(crate) fn begin_submission(&mut self) -> Option<(RequestId, SelectedFile, String)> {
        let file = self.file.clone()?;
        let request_id = self.next_request;
        self.next_request += 1;
        self.in_flight = Some(request_id);
        self.lifecycle = Lifecycle::Submitting;
        self.outcome = None;
        self.dirty = true;
        Some((request_id, file, self.question.clone()))
    }

    /// Whether `request_id` is the submission currently awaiting a reply.
    pub(crate) fn matches_in_flight(&self, request_id: RequestId) -> bool {
        self.in_flight == Some(request_id)
    }

    pub(crate) fn settle(&mut self, outcome: Outcome) {
        self.in_flight = None;
        self.lifecycle = Lifecycle::Settled;
        self.outcome = Some(outcome);
        self.dirty = true;
    }
}
