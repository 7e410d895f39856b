//! PDF Upload Service
//!
//! A small HTTP service that accepts up to five PDF uploads per multipart
//! request, stores each accepted file under a generated UUID-based name,
//! and reports success/failure per file.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request            ┌──────────┐    ┌──────────┐    ┌──────────┐
//!     ─────────────────────────▶│   http   │───▶│  upload  │───▶│  upload  │
//!     multipart POST /upload    │  server  │    │ handler  │    │  store   │
//!                               └──────────┘    └──────────┘    └────┬─────┘
//!                                                                    │
//!     Client Response                                                ▼
//!     ◀─────────────────────────  success / fileIds / message   upload dir
//!
//!     Cross-cutting: config (TOML + validation), lifecycle (shutdown),
//!     observability via tracing, CORS for the single dev origin.
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod upload;

// Cross-cutting concerns
pub mod lifecycle;
