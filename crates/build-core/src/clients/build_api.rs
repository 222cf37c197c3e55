//! Client for the proxy's own `/api/build` endpoint

use super::conversion_form;
use crate::error::{BuildError, Result};
use crate::types::UploadedFile;
use log::debug;
use reqwest::Client as HttpClient;
use std::time::Duration;

pub struct BuildApiClient {
    endpoint: String,
    http_client: HttpClient,
}

impl BuildApiClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a document for conversion and return the response body
    ///
    /// A non-success response becomes [`BuildError::UpstreamFailed`] carrying
    /// the proxy's status and raw body text.
    pub async fn build(&self, file: &UploadedFile, instructions: &str) -> Result<Vec<u8>> {
        let form = conversion_form(file, instructions)?;

        let response = self.http_client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        debug!("Build endpoint responded with {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BuildError::UpstreamFailed {
                status: status.as_u16(),
                body,
            });
        }

        let data = response.bytes().await?;
        Ok(data.to_vec())
    }
}
