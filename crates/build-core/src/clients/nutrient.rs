//! Nutrient Processor API client

use super::conversion_form;
use crate::config::NutrientConfig;
use crate::error::{BuildError, Result};
use crate::types::{ConversionRequest, Credential};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client as HttpClient;

/// The upstream conversion operation
///
/// One synchronous call: document plus instructions in, converted bytes out.
/// Implementations report a non-success upstream status as
/// [`BuildError::UpstreamFailed`].
#[async_trait]
pub trait ConversionService: Send + Sync {
    async fn convert(&self, credential: &Credential, request: &ConversionRequest) -> Result<Vec<u8>>;
}

pub struct NutrientClient {
    config: NutrientConfig,
    http_client: HttpClient,
}

impl NutrientClient {
    pub fn new(config: NutrientConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl ConversionService for NutrientClient {
    async fn convert(&self, credential: &Credential, request: &ConversionRequest) -> Result<Vec<u8>> {
        let form = conversion_form(&request.file, &request.instructions)?;

        debug!(
            "Forwarding {} ({} bytes) to {}",
            request.file.file_name,
            request.file.len(),
            self.config.base_url
        );

        let response = self.http_client
            .post(&self.config.base_url)
            .bearer_auth(credential.expose())
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            error!("Nutrient API error: {} {}", status, error_text);
            return Err(BuildError::UpstreamFailed {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let pdf_data = response.bytes().await.map_err(|e| self.transport_error(e))?;
        Ok(pdf_data.to_vec())
    }
}

impl NutrientClient {
    // Timeouts count as an upstream failure; anything else is internal
    fn transport_error(&self, e: reqwest::Error) -> BuildError {
        if e.is_timeout() {
            error!(
                "Nutrient API timed out after {}s: {}",
                self.config.timeout_secs, e
            );
            BuildError::UpstreamFailed {
                status: 504,
                body: format!("timed out after {}s", self.config.timeout_secs),
            }
        } else {
            BuildError::Http(e)
        }
    }
}
