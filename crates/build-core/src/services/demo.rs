//! Demo client: sends a sample document through the build endpoint

use crate::clients::BuildApiClient;
use crate::constants::{DOCX_MEDIA_TYPE, FILE_FIELD};
use crate::error::{BuildError, Result};
use crate::types::{ConversionResult, UploadedFile};
use build_types::Instructions;
use log::{error, info};
use std::path::{Path, PathBuf};

const SAMPLE_CONTENT: &str = "This is a test document for demo purposes.";
const SAMPLE_FILE_NAME: &str = "test.docx";

/// Whether a demo run is currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoState {
    Idle,
    Requesting,
}

/// Result of the most recent demo run
#[derive(Debug, Clone, PartialEq)]
pub enum DemoOutcome {
    Success {
        message: String,
        size: usize,
        saved_to: PathBuf,
    },
    Failure {
        message: String,
    },
}

impl DemoOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DemoOutcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            DemoOutcome::Success { message, .. } | DemoOutcome::Failure { message } => message,
        }
    }
}

/// Placeholder document standing in for a real DOCX
pub fn sample_document() -> UploadedFile {
    UploadedFile::new(
        SAMPLE_FILE_NAME,
        Some(DOCX_MEDIA_TYPE.to_string()),
        SAMPLE_CONTENT.as_bytes().to_vec(),
    )
}

/// Instructions converting the `file` field to PDF
pub fn sample_instructions() -> Result<String> {
    Instructions::pdf_from_field(FILE_FIELD)
        .to_json()
        .map_err(|e| BuildError::Internal(format!("Failed to serialize instructions: {}", e)))
}

pub struct DemoRunner {
    client: BuildApiClient,
    output_path: PathBuf,
    state: DemoState,
    last_outcome: Option<DemoOutcome>,
}

impl DemoRunner {
    pub fn new(client: BuildApiClient, output_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_path: output_path.into(),
            state: DemoState::Idle,
            last_outcome: None,
        }
    }

    pub fn state(&self) -> DemoState {
        self.state
    }

    pub fn last_outcome(&self) -> Option<&DemoOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Run one demo invocation; the previous outcome is discarded first
    pub async fn run(&mut self) -> &DemoOutcome {
        self.last_outcome = None;
        self.state = DemoState::Requesting;
        info!("Submitting sample document to {}", self.client.endpoint());

        let outcome = match self.request_and_save().await {
            Ok(size) => {
                info!("Saved {} bytes to {}", size, self.output_path.display());
                DemoOutcome::Success {
                    message: format!("Success! Generated PDF ({} bytes)", size),
                    size,
                    saved_to: self.output_path.clone(),
                }
            }
            Err(e) => {
                let message = match e {
                    BuildError::UpstreamFailed { status, body } => format!("HTTP {}: {}", status, body),
                    other => other.to_string(),
                };
                error!("Demo failed: {}", message);
                DemoOutcome::Failure { message }
            }
        };

        self.state = DemoState::Idle;
        self.last_outcome.insert(outcome)
    }

    async fn request_and_save(&self) -> Result<usize> {
        let instructions = sample_instructions()?;
        let data = self.client.build(&sample_document(), &instructions).await?;

        // The endpoint enforces this too; check again before writing anything
        let result = ConversionResult::validated(data)?;

        tokio::fs::write(&self.output_path, &result.data).await?;
        Ok(result.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_sample_request_contents() {
        let doc = sample_document();
        assert_eq!(doc.file_name, "test.docx");
        assert_eq!(doc.content_type.as_deref(), Some(DOCX_MEDIA_TYPE));
        assert_eq!(sample_instructions().unwrap(), r#"{"parts":[{"file":"file"}],"output":{"type":"pdf"}}"#);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("demo-output.pdf");
        let client = BuildApiClient::new("http://127.0.0.1:9/api/build", Duration::from_secs(5)).unwrap();
        let mut runner = DemoRunner::new(client, &output);

        assert_eq!(runner.state(), DemoState::Idle);
        let outcome = runner.run().await.clone();

        assert!(!outcome.is_success());
        assert!(outcome.message().starts_with("HTTP request failed"));
        assert_eq!(runner.state(), DemoState::Idle);
        assert!(!output.exists());
    }
}
