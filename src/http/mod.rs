//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware layering)
//!     → CORS / timeout / trace layers
//!     → upload handler (POST /upload) or health probe (GET /health)
//!     → JSON response to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
