use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, UpdateTask};

/// Repository trait for Task persistence.
///
/// The data access seam for tasks. Implementations back it with MongoDB
/// ([`crate::MongoTaskRepository`]) or process memory
/// ([`crate::InMemoryTaskRepository`]).
///
/// Identifiers arrive pre-validated as `ObjectId`: malformed ids are rejected
/// at the HTTP boundary and never reach a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List all tasks
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Create a new task, assigning its identifier
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by id
    async fn get_by_id(&self, id: ObjectId) -> TaskResult<Option<Task>>;

    /// Update an existing task; `TaskError::NotFound` if no record matches
    async fn update(&self, id: ObjectId, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by id; `TaskError::NotFound` if no record matches
    async fn delete(&self, id: ObjectId) -> TaskResult<()>;
}
