//! Slidecast engine: service configuration and upload execution.
mod client;
mod config;
mod engine;
mod types;

pub use client::{ReqwestSubmitClient, SubmitClient};
pub use config::ServiceConfig;
pub use engine::EngineHandle;
pub use types::{EngineEvent, FailureKind, RequestId, ServiceReply, SubmitError, UploadRequest};
