use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use build_core::constants::{FILE_FIELD, INSTRUCTIONS_FIELD};
use build_core::{BuildError, BuildForm, UploadedFile};

/// Parse a multipart form upload into the raw build fields.
///
/// Presence is not checked here; a missing field stays `None`. When a field
/// is repeated the first occurrence wins. A body over `max_upload_bytes`
/// fails with [`BuildError::UploadTooLarge`].
pub async fn parse_multipart(mut multipart: Multipart, max_upload_bytes: usize) -> Result<BuildForm, BuildError> {
    let mut form = BuildForm::default();
    let read_error = |context: &str, e: MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            BuildError::UploadTooLarge { limit: max_upload_bytes }
        } else {
            BuildError::Internal(format!("{}: {}", context, e))
        }
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error("Failed to read form field", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        // Unknown and repeated fields are skipped by the next `next_field` call
        match name.as_str() {
            FILE_FIELD if form.file.is_none() => {
                let file_name = field.file_name().unwrap_or(FILE_FIELD).to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| read_error("Failed to read file data", e))?
                    .to_vec();

                form.file = Some(UploadedFile::new(file_name, content_type, data));
            }
            INSTRUCTIONS_FIELD if form.instructions.is_none() => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| read_error("Failed to read instructions", e))?;
                form.instructions = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}
