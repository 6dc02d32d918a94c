//! Upload and listing handlers for the image gateway.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use crate::AppState;
use crate::error::{Result, ServerError};
use crate::storage::upload_path;

/// Response for a successful upload
#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub url: String,
}

/// POST /upload - Store an image in the visualizations bucket
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ServerError::BadRequest(e.to_string()))?;

        let path = upload_path(Utc::now().timestamp_millis(), &filename);
        info!(%filename, %path, size = data.len(), "storing upload");

        let record = state.store.put(&path, data).await?;
        info!(url = %record.public_url, "upload successful");

        return Ok(Json(UploadResponse {
            message: "Upload successful".to_string(),
            url: record.public_url,
        }));
    }

    warn!("upload request without an image field");
    Err(ServerError::NoFileUploaded)
}

/// GET /images - List uploaded images as public URLs
pub async fn list_images(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>> {
    let urls = state.store.list().await?;
    info!(count = urls.len(), "listed uploaded images");
    Ok(Json(urls))
}
