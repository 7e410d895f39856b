//! Upload error definitions.
//!
//! Two tiers: [`FileError`] describes why one submitted file was not
//! stored and is accumulated while the rest of the batch continues;
//! [`UploadError`] rejects the whole request and maps to an HTTP 400 with
//! a JSON `{"detail": ...}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Why a single submitted file was not stored.
///
/// The Display strings are surfaced verbatim in response messages.
#[derive(Debug, Error)]
pub enum FileError {
    /// Declared content type was not `application/pdf`.
    #[error("File {filename} is not a PDF")]
    NotPdf { filename: String },

    /// Reading the part from the request or writing it to disk failed.
    #[error("Error processing {filename}: {reason}")]
    Io { filename: String, reason: String },
}

/// Failures that reject the whole request before or after the per-file loop.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request carried no file parts.
    #[error("No files provided")]
    NoFiles,

    /// More file parts than the configured limit.
    #[error("Maximum {limit} files allowed")]
    TooManyFiles { limit: usize },

    /// Every submitted file failed validation or storage.
    /// Carries the per-file messages joined with ". ".
    #[error("{0}")]
    AllFailed(String),

    /// The multipart stream itself could not be read.
    #[error("Malformed multipart request: {0}")]
    Multipart(String),
}

/// JSON error body, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
