//! Image and document uploads for the admin console.
//!
//! Files land in the content bucket under `<folder>/<uuid>.<ext>`; the response
//! carries the public URL the operator pastes into a content field.

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::crud::operator_backend;
use crate::api::response::{Created, DataResponse};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::error::ApiError;

const DEFAULT_FOLDER: &str = "uploads";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub path: String,
    pub url: String,
    pub content_type: String,
    pub size: usize,
}

struct UploadedFile {
    file_name: Option<String>,
    content_type: String,
    bytes: Vec<u8>,
}

pub fn is_allowed_type(content_type: &str) -> bool {
    content_type.starts_with("image/") || content_type == "application/pdf"
}

/// Lowercase folder path made of `[a-z0-9_-]` segments; anything else is dropped.
pub fn sanitize_folder(folder: &str) -> String {
    let segments: Vec<String> = folder
        .split('/')
        .map(|segment| {
            segment
                .trim()
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        DEFAULT_FOLDER.to_string()
    } else {
        segments.join("/")
    }
}

/// Extension from the original file name, else from the content type.
pub fn extension_for(file_name: Option<&str>, content_type: &str) -> String {
    let from_name = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    from_name.unwrap_or_else(|| {
        match content_type {
            "image/jpeg" => "jpg",
            "image/svg+xml" => "svg",
            "application/pdf" => "pdf",
            other => other.rsplit('/').next().unwrap_or("bin"),
        }
        .to_string()
    })
}

/// POST /admin/uploads (multipart: `file`, optional `folder`)
pub async fn upload(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let max_bytes = state.settings.max_upload_bytes;
    let mut file: Option<UploadedFile> = None;
    let mut folder = DEFAULT_FOLDER.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_lowercase();

                if !is_allowed_type(&content_type) {
                    return Err(ApiError::bad_request(format!(
                        "Unsupported file type {}; only images and PDF documents are accepted",
                        content_type
                    )));
                }

                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;

                if bytes.len() > max_bytes {
                    return Err(ApiError::bad_request(format!(
                        "File is {} bytes; the limit is {} bytes",
                        bytes.len(),
                        max_bytes
                    )));
                }

                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("folder") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid folder field: {}", e)))?;
                folder = sanitize_folder(&text);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::bad_request("Missing file field"))?;
    if file.bytes.is_empty() {
        return Err(ApiError::bad_request("Uploaded file is empty"));
    }

    let path = format!(
        "{}/{}.{}",
        folder,
        Uuid::new_v4(),
        extension_for(file.file_name.as_deref(), &file.content_type)
    );
    let size = file.bytes.len();
    let bucket = &state.settings.storage_bucket;

    let backend = operator_backend(&state, &auth);
    backend
        .upload(bucket, &path, file.bytes, &file.content_type)
        .await?;

    tracing::info!(path = %path, size = size, user_id = %auth.user_id, "File uploaded");

    Ok(Created(DataResponse::new(UploadResponse {
        url: backend.public_url(bucket, &path),
        path,
        content_type: file.content_type,
        size,
    })))
}
