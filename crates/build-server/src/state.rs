use build_core::clients::{ConversionService, NutrientClient};
use build_core::{BuildProcessor, ProxyConfig, Result};
use std::sync::Arc;

/// Shared application state accessible from all handlers.
///
/// Read-only after startup.
pub struct AppState {
    pub processor: BuildProcessor,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Wire the real Nutrient client from configuration
    pub fn from_config(config: &ProxyConfig) -> Result<Self> {
        let client = NutrientClient::new(config.nutrient.clone())?;
        Ok(Self::with_converter(config, Arc::new(client)))
    }

    /// Use an arbitrary conversion backend (tests pass a fake here)
    pub fn with_converter(config: &ProxyConfig, converter: Arc<dyn ConversionService>) -> Self {
        Self {
            processor: BuildProcessor::new(converter, config.nutrient.credential()),
            max_upload_bytes: config.server.max_upload_bytes,
        }
    }
}
