//! Image upload service.
//!
//! # Contract
//!
//! - `POST /upload/` with a multipart field named `image`: stores the file
//!   under `<media root>/profile_images/` renamed to a random UUID with the
//!   original extension preserved, and answers
//!   `{"success": true, "image_url": ..., "message": ...}`
//! - Missing field: HTTP 400 with `{"success": false, "message": ...}`
//! - Storage failure: HTTP 500 with `{"success": false, "message": ...}`
//! - Any method other than POST on `/upload/`: HTTP 405
//! - `GET /media/...`: serves stored files
//! - `GET /health`: liveness probe

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;

use std::path::Path;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use uuid::Uuid;

pub use config::{ConfigError, UploadsConfig};

/// Subdirectory of the media root that uploads land in.
pub const UPLOAD_SUBDIR: &str = "profile_images";

/// Multipart field name the mobile app sends the file under.
pub const IMAGE_FIELD: &str = "image";

/// JSON body returned by the upload route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub message: String,
}

/// Upload failures, mapped onto the wire contract by `IntoResponse`.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The multipart body carried no `image` field.
    #[error("No image file provided")]
    MissingImage,

    /// The multipart body could not be read.
    #[error("Upload failed: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// The file could not be stored.
    #[error("Upload failed: {0}")]
    Storage(#[from] std::io::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingImage => StatusCode::BAD_REQUEST,
            Self::Multipart(_) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "Upload failed");
        }

        let body = UploadResponse {
            success: false,
            image_url: None,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Build the service router.
#[must_use]
pub fn router(config: UploadsConfig) -> Router {
    let media_dir = config.media_root.clone();
    Router::new()
        .route("/health", get(health))
        // Non-POST methods on the upload route get the 405 JSON the mobile
        // app expects instead of an empty body.
        .route(
            "/upload/",
            post(upload_image).fallback(method_not_allowed),
        )
        .nest_service("/media", ServeDir::new(media_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}

async fn health() -> &'static str {
    "ok"
}

async fn method_not_allowed() -> Response {
    let body = UploadResponse {
        success: false,
        image_url: None,
        message: "Only POST method allowed".to_string(),
    };
    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}

/// Store one uploaded image.
async fn upload_image(
    State(config): State<Arc<UploadsConfig>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;

        let filename = unique_filename(&original_name);
        let dir = config.media_root.join(UPLOAD_SUBDIR);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&filename), &data).await?;

        let image_url = format!(
            "{}/media/{UPLOAD_SUBDIR}/{filename}",
            config.public_base_url.trim_end_matches('/')
        );
        info!(
            original = %original_name,
            stored = %filename,
            bytes = data.len(),
            "Image uploaded"
        );

        return Ok(Json(UploadResponse {
            success: true,
            image_url: Some(image_url),
            message: "Image uploaded successfully".to_string(),
        }));
    }

    Err(UploadError::MissingImage)
}

/// Random unique filename preserving the original extension.
fn unique_filename(original: &str) -> String {
    let id = Uuid::new_v4();
    match Path::new(original).extension() {
        // `extension()` never contains path separators, so the result is
        // safe to join under the upload directory.
        Some(ext) => format!("{id}.{}", ext.to_string_lossy()),
        None => id.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_filename_preserves_extension() {
        let name = unique_filename("avatar.png");
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), 36 + 4); // uuid + ".png"
    }

    #[test]
    fn test_unique_filename_preserves_extension_case() {
        let name = unique_filename("SHOT.JPG");
        assert!(name.ends_with(".JPG"));
    }

    #[test]
    fn test_unique_filename_without_extension() {
        let name = unique_filename("raw-upload");
        assert_eq!(name.len(), 36);
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_unique_filenames_do_not_collide() {
        assert_ne!(unique_filename("a.png"), unique_filename("a.png"));
    }

    #[test]
    fn test_failure_body_omits_image_url() {
        let body = UploadResponse {
            success: false,
            image_url: None,
            message: "No image file provided".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("image_url").is_none());
        assert_eq!(json["success"], false);
    }
}
