#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue exactly one upload request to the generation service.
    SubmitUpload {
        request_id: crate::RequestId,
        file: crate::SelectedFile,
        question: String,
    },
}
