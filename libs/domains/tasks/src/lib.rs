//! Tasks Domain
//!
//! Domain implementation for the todo task list: entity and DTOs, a
//! `TaskRepository` persistence trait with MongoDB and in-memory
//! implementations, a `TaskService` business layer, and Axum HTTP handlers.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{handlers, service::TaskService, MongoTaskRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("todo");
//!
//! let repository = MongoTaskRepository::new(db);
//! let service = TaskService::new(repository);
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryTaskRepository;
pub use models::{CreateTask, Task, UpdateTask};
pub use mongodb::MongoTaskRepository;
pub use repository::TaskRepository;
pub use service::TaskService;
