//! Validation pipeline behind `POST /api/build`

use crate::clients::ConversionService;
use crate::constants::API_KEY_ENV_VAR;
use crate::error::{BuildError, Result};
use crate::types::{BuildForm, ConversionResult, Credential};
use log::{error, info};
use std::sync::Arc;

/// Validates a build form, forwards it upstream and checks the result
///
/// Holds only immutable data, so a single instance serves concurrent requests.
pub struct BuildProcessor {
    converter: Arc<dyn ConversionService>,
    credential: Option<Credential>,
}

impl BuildProcessor {
    pub fn new(converter: Arc<dyn ConversionService>, credential: Option<Credential>) -> Self {
        Self {
            converter,
            credential,
        }
    }

    /// Whether an upstream credential is available
    pub fn is_configured(&self) -> bool {
        self.credential.is_some()
    }

    /// Run one build request end to end
    ///
    /// Input errors and a missing credential short-circuit before any
    /// upstream call is made.
    pub async fn process(&self, request_id: &str, form: BuildForm) -> Result<ConversionResult> {
        let request = form.into_request()?;

        let credential = self.credential.as_ref().ok_or_else(|| {
            error!("[{}] {} not configured", request_id, API_KEY_ENV_VAR);
            BuildError::ServiceMisconfigured(format!("{} not configured", API_KEY_ENV_VAR))
        })?;

        info!(
            "[{}] Converting {} ({} bytes)",
            request_id,
            request.file.file_name,
            request.file.len()
        );

        let data = self.converter.convert(credential, &request).await?;
        let result = ConversionResult::validated(data)?;

        info!("[{}] Conversion produced {} bytes", request_id, result.len());
        Ok(result)
    }
}
