//! Client modules for external services

pub mod nutrient;
pub mod build_api;

pub use nutrient::{ConversionService, NutrientClient};
pub use build_api::BuildApiClient;

use crate::constants::{FILE_FIELD, INSTRUCTIONS_FIELD};
use crate::error::Result;
use crate::types::UploadedFile;
use reqwest::multipart;

/// Multipart body carrying a document and its instructions
///
/// Used for both hops: demo to proxy, and proxy to Nutrient.
pub(crate) fn conversion_form(file: &UploadedFile, instructions: &str) -> Result<multipart::Form> {
    let content_type = file
        .content_type
        .as_deref()
        .unwrap_or("application/octet-stream");

    let file_part = multipart::Part::bytes(file.data.clone())
        .file_name(file.file_name.clone())
        .mime_str(content_type)?;

    let form = multipart::Form::new()
        .part(FILE_FIELD, file_part)
        .text(INSTRUCTIONS_FIELD, instructions.to_string());

    Ok(form)
}
