use client_logging::{client_debug, client_warn};
use reqwest::multipart::{Form, Part};

use crate::{FailureKind, ServiceConfig, ServiceReply, SubmitError, UploadRequest};

#[async_trait::async_trait]
pub trait SubmitClient: Send + Sync {
    async fn submit(&self, request: &UploadRequest) -> Result<ServiceReply, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitClient {
    config: ServiceConfig,
}

impl ReqwestSubmitClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .connect_timeout(self.config.connect_timeout)
            .timeout(self.config.request_timeout)
            .build()
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl SubmitClient for ReqwestSubmitClient {
    /// Issues exactly one `POST {base}/upload/` with the document and the
    /// question as multipart fields. No retries.
    async fn submit(&self, request: &UploadRequest) -> Result<ServiceReply, SubmitError> {
        let client = self.build_client()?;
        let file_part = Part::bytes(request.content.clone()).file_name(request.file_name.clone());
        let form = Form::new()
            .part("file", file_part)
            .text("question", request.question.clone());

        client_debug!(
            "POST {} file={} ({} bytes) question_len={}",
            self.config.submit_url(),
            request.file_name,
            request.content.len(),
            request.question.len()
        );

        let response = client
            .post(self.config.submit_url())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(SubmitError::new(
                FailureKind::HttpStatus(status.as_u16()),
                error_detail(&body).unwrap_or_else(|| status.to_string()),
            ));
        }

        serde_json::from_str::<ServiceReply>(&body).map_err(|err| {
            // Distinguishable from a service rejection in the log even
            // though the user sees a generic message.
            client_warn!(
                "service returned {} with an unreadable body ({} bytes): {err}",
                status,
                body.len()
            );
            SubmitError::new(
                FailureKind::MalformedBody,
                "The service returned an unreadable response.",
            )
        })
    }
}

/// Rejection bodies are JSON objects carrying a `detail` string when the
/// service itself refused the request.
fn error_detail(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.detail)
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(
            FailureKind::Timeout,
            "The service did not answer in time.",
        );
    }
    SubmitError::new(FailureKind::Network, err.to_string())
}
