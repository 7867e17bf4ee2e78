//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation and common middleware
//! - Static asset serving with SPA fallback
//! - Graceful shutdown on SIGINT/SIGTERM

pub mod app;
pub mod shutdown;
pub mod static_assets;

pub use app::{create_app, create_router};
pub use shutdown::shutdown_signal;
pub use static_assets::spa_fallback_service;
