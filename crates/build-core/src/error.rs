//! Error types for the build proxy

use crate::constants::MIN_OUTPUT_BYTES;
use thiserror::Error;

/// Every way a build request can fail
///
/// Each variant maps to exactly one HTTP status and one client-safe message.
/// Detail carried inside a variant (upstream bodies, I/O errors) is for the
/// server log only.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Missing file in request")]
    MissingFile,

    #[error("Missing instructions in request")]
    MissingInstructions,

    #[error("Invalid JSON in instructions: {0}")]
    MalformedInstructions(#[source] serde_json::Error),

    #[error("Invalid instructions format: missing parts or output")]
    InvalidInstructionsShape,

    #[error("Upload exceeds the {limit} byte limit")]
    UploadTooLarge { limit: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service not configured: {0}")]
    ServiceMisconfigured(String),

    #[error("Upstream conversion failed with status {status}: {body}")]
    UpstreamFailed { status: u16, body: String },

    #[error("PDF too small: {size} bytes (minimum 10 KB required)")]
    OutputTooSmall { size: usize },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BuildError {
    /// HTTP status the caller receives for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            BuildError::MissingFile
            | BuildError::MissingInstructions
            | BuildError::MalformedInstructions(_)
            | BuildError::InvalidInstructionsShape
            | BuildError::OutputTooSmall { .. } => 400,
            BuildError::UploadTooLarge { .. } => 413,
            BuildError::UpstreamFailed { status, .. } => *status,
            BuildError::Config(_)
            | BuildError::ServiceMisconfigured(_)
            | BuildError::Http(_)
            | BuildError::Io(_)
            | BuildError::Internal(_) => 500,
        }
    }

    /// Message safe to return in the `error` field of the response body
    pub fn client_message(&self) -> String {
        match self {
            BuildError::MissingFile
            | BuildError::MissingInstructions
            | BuildError::InvalidInstructionsShape
            | BuildError::OutputTooSmall { .. } => self.to_string(),
            BuildError::UploadTooLarge { .. } => "File too large".to_string(),
            BuildError::MalformedInstructions(_) => "Invalid JSON in instructions".to_string(),
            BuildError::ServiceMisconfigured(_) => "Service not configured".to_string(),
            BuildError::UpstreamFailed { status, .. } => format!("Nutrient API error: {}", status),
            BuildError::Config(_)
            | BuildError::Http(_)
            | BuildError::Io(_)
            | BuildError::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// True for failures caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code()) && !matches!(self, BuildError::UpstreamFailed { .. })
    }

    pub(crate) fn output_too_small(size: usize) -> Option<Self> {
        (size <= MIN_OUTPUT_BYTES).then_some(BuildError::OutputTooSmall { size })
    }
}

/// Result type for build proxy operations
pub type Result<T> = std::result::Result<T, BuildError>;
