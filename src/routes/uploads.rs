use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::models::DataTable;
use crate::services::upload_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload))
}

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Deserialize)]
pub struct UploadedFile {
    /// Browser upload payload: "{content_type},{base64}".
    pub content: String,
    pub filename: String,
    #[serde(default)]
    pub last_modified: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UploadOutcome {
    Table {
        filename: String,
        last_modified: Option<i64>,
        table: DataTable,
    },
    Error {
        filename: String,
        error: String,
    },
}

/// Normalizes each uploaded file independently. A bad file produces an
/// inline error entry for that file only; the response itself is 200 so
/// the other files still render.
pub async fn upload(Json(data): Json<UploadRequest>) -> Json<Vec<UploadOutcome>> {
    info!("POST /uploads - Normalizing {} uploaded file(s)", data.files.len());

    let results = data
        .files
        .iter()
        .map(|file| match upload_service::normalize(&file.content, &file.filename) {
            Ok(table) => UploadOutcome::Table {
                filename: file.filename.clone(),
                last_modified: file.last_modified,
                table,
            },
            Err(e) => {
                // Log the detail, hand the client a generic message
                error!("Failed to normalize upload {}: {}", file.filename, e);
                UploadOutcome::Error {
                    filename: file.filename.clone(),
                    error: "There was an error processing this file.".to_string(),
                }
            }
        })
        .collect();

    Json(results)
}
