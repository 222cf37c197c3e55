use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use build_core::constants::PDF_MEDIA_TYPE;
use build_core::BuildError;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::upload;

/// `POST /api/build`: convert an uploaded document through Nutrient
pub async fn build(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let request_id = uuid::Uuid::new_v4().to_string();

    let multipart = multipart.map_err(|e| {
        ApiError::new(&request_id, BuildError::Internal(format!("Invalid multipart request: {}", e)))
    })?;

    let form = upload::parse_multipart(multipart, state.max_upload_bytes)
        .await
        .map_err(|e| ApiError::new(&request_id, e))?;

    let result = state
        .processor
        .process(&request_id, form)
        .await
        .map_err(|e| ApiError::new(&request_id, e))?;

    let length = result.len();
    Ok((
        [
            (header::CONTENT_TYPE, PDF_MEDIA_TYPE.to_string()),
            (header::CONTENT_LENGTH, length.to_string()),
        ],
        result.into_bytes(),
    )
        .into_response())
}
