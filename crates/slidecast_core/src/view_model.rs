#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    pub file_name: Option<String>,
    pub question: String,
    pub submit_enabled: bool,
    pub result: ResultView,
}

impl Default for FormViewModel {
    fn default() -> Self {
        Self {
            file_name: None,
            question: String::new(),
            submit_enabled: true,
            result: ResultView::Hidden,
        }
    }
}

/// What the result area shows. `Ready` carries the opaque artifact
/// identifier; resolving it to a retrieval URL is the platform's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    /// Nothing to show yet.
    #[default]
    Hidden,
    /// A submission is in flight; busy affordance only.
    Pending,
    Ready {
        message: String,
        artifact: Option<String>,
    },
    Error {
        message: String,
    },
}
