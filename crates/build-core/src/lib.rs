//! Build Proxy Core Library
//!
//! Everything behind the `/api/build` endpoint that does not depend on the
//! HTTP server: configuration, the error taxonomy, the upstream Nutrient
//! client, request validation and the demo client.

pub mod config;
pub mod clients;
pub mod services;
pub mod types;
pub mod error;
pub mod constants;

pub use config::ProxyConfig;
pub use error::{BuildError, Result};

pub use clients::{
    BuildApiClient,
    ConversionService,
    NutrientClient,
};

pub use services::{
    BuildProcessor,
    DemoOutcome,
    DemoRunner,
    DemoState,
};

pub use types::{
    BuildForm,
    ConversionRequest,
    ConversionResult,
    Credential,
    UploadedFile,
};
