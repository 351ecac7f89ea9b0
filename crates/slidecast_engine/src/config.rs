use std::time::Duration;

use url::Url;

/// Where the generation service lives and how long we wait for it. The
/// single point of change for the base address; no call site builds a
/// service URL on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://127.0.0.1:8000").expect("static default url"),
            connect_timeout: Duration::from_secs(10),
            // Rendering a presentation can take a while.
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl ServiceConfig {
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// `POST` target for submissions.
    pub fn submit_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("/upload/");
        url
    }

    /// `GET` target for a produced artifact. The identifier is substituted
    /// verbatim; the service owns its shape.
    pub fn download_url(&self, artifact: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/download/{artifact}"));
        url
    }
}
