//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the HTTP-facing crates.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses
//! - **[`extractors`]**: Custom extractors (ObjectId path, validated JSON)
//! - **[`logging`]**: Request/response logging middleware
//! - **[`server`]**: Router assembly, static asset serving, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod logging;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{ObjectIdPath, ValidatedJson};

// Re-export middleware
pub use logging::log_requests;

// Re-export server helpers
pub use server::{create_app, create_router, shutdown_signal, spa_fallback_service};
