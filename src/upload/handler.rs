//! The upload handler: `POST /upload`.
//!
//! # Responsibilities
//! - Drain the multipart stream into an ordered list of submitted files
//! - Enforce the whole-request input constraints (non-empty, at most N)
//! - Run the per-file validate → id → persist loop
//! - Assemble the JSON summary response
//!
//! # Design Decisions
//! - The multipart stream is drained before any file is processed, so the
//!   count limits reject the request before anything touches disk
//! - The per-file loop produces two sequences (stored ids, errors) rather
//!   than using error control flow; one file's failure never aborts the rest

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::http::server::AppState;
use crate::upload::error::{FileError, UploadError};
use crate::upload::storage::{self, UploadStore};

/// The only content type accepted for upload.
pub const PDF_MIME: &str = "application/pdf";

/// Summary returned for a successful upload request.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(rename = "fileIds")]
    pub file_ids: Vec<String>,
    pub message: String,
}

/// One file part drained from the multipart stream.
///
/// `data` carries the read failure instead of the bytes when the part's
/// body could not be read, so the failure stays isolated to this file.
#[derive(Debug)]
struct SubmittedFile {
    filename: String,
    content_type: Option<String>,
    data: Result<Bytes, String>,
}

/// Handle one upload request.
pub async fn upload_files(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, UploadError> {
    let files = collect_files(multipart).await?;

    if files.is_empty() {
        return Err(UploadError::NoFiles);
    }
    let limit = state.limits.max_files_per_request;
    if files.len() > limit {
        tracing::warn!(submitted = files.len(), limit, "Too many files in one request");
        return Err(UploadError::TooManyFiles { limit });
    }

    let (file_ids, errors) = process_files(&state.store, files).await;

    if file_ids.is_empty() && !errors.is_empty() {
        let joined = join_messages(&errors, ". ");
        return Err(UploadError::AllFailed(joined));
    }

    tracing::info!(
        stored = file_ids.len(),
        rejected = errors.len(),
        "Upload request complete"
    );

    let mut message = format!("Successfully uploaded {} file(s)", file_ids.len());
    if !errors.is_empty() {
        message.push_str(". Errors: ");
        message.push_str(&join_messages(&errors, " "));
    }

    Ok(Json(UploadResponse {
        success: true,
        file_ids,
        message,
    }))
}

/// Drain every part of the multipart stream, preserving submission order.
///
/// A failure to read one part's body is recorded on that file; a failure
/// to advance the stream itself rejects the whole request.
async fn collect_files(mut multipart: Multipart) -> Result<Vec<SubmittedFile>, UploadError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        let filename = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| "unnamed".to_string());
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|e| e.to_string());

        files.push(SubmittedFile {
            filename,
            content_type,
            data,
        });
    }

    Ok(files)
}

/// The per-file loop: validate content type, generate an id, persist.
///
/// Returns the generated ids of stored files and the accumulated per-file
/// errors, both in submission order.
async fn process_files(
    store: &UploadStore,
    files: Vec<SubmittedFile>,
) -> (Vec<String>, Vec<FileError>) {
    let mut file_ids = Vec::new();
    let mut errors = Vec::new();

    for file in files {
        if file.content_type.as_deref() != Some(PDF_MIME) {
            tracing::warn!(
                filename = %file.filename,
                content_type = ?file.content_type,
                "Rejected non-PDF upload"
            );
            errors.push(FileError::NotPdf {
                filename: file.filename,
            });
            continue;
        }

        let data = match file.data {
            Ok(data) => data,
            Err(reason) => {
                errors.push(FileError::Io {
                    filename: file.filename,
                    reason,
                });
                continue;
            }
        };

        let id = Uuid::new_v4();
        let stored_name = format!("{}{}", id, storage::file_extension(&file.filename));

        match store.save(&stored_name, &data).await {
            Ok(path) => {
                tracing::debug!(
                    filename = %file.filename,
                    file_id = %id,
                    path = %path.display(),
                    "Stored upload"
                );
                file_ids.push(id.to_string());
            }
            Err(e) => {
                tracing::error!(filename = %file.filename, error = %e, "Failed to store upload");
                errors.push(FileError::Io {
                    filename: file.filename,
                    reason: e.to_string(),
                });
            }
        }
    }

    (file_ids, errors)
}

fn join_messages(errors: &[FileError], separator: &str) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
