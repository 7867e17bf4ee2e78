//! Tasks API routes
//!
//! Wires the tasks domain to HTTP routes.

use axum::Router;
use domain_tasks::{MongoTaskRepository, TaskService, handlers};

use crate::state::AppState;

/// Create tasks router
pub fn router(state: &AppState) -> Router {
    let repository = MongoTaskRepository::new(state.db.clone());

    let service = TaskService::new(repository);

    handlers::router(service)
}
