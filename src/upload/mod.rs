//! Upload handling subsystem.
//!
//! # Data Flow
//! ```text
//! multipart POST /upload
//!     → handler.rs (drain parts, enforce count limits)
//!     → per-file loop: validate content type → generate id → storage.rs
//!     → UploadResponse (success flag, stored ids, summary message)
//! ```
//!
//! # Design Decisions
//! - Per-file failures are accumulated values, never early returns;
//!   one bad file does not abort the rest of the batch
//! - Stored files are named {uuid}{original extension} so concurrent
//!   requests cannot collide on the shared directory
//! - The declared content type is trusted; file bytes are not sniffed

pub mod error;
pub mod handler;
pub mod storage;

pub use error::{FileError, UploadError};
pub use handler::{upload_files, UploadResponse, PDF_MIME};
pub use storage::UploadStore;
