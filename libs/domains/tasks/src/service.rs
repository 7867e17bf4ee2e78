//! Task Service - business logic layer

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer over a [`TaskRepository`].
///
/// Validates DTOs before any repository dispatch, so malformed input never
/// reaches the store, and orchestrates repository operations.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all tasks
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Create a new task
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a task by id
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: ObjectId) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Update an existing task
    #[instrument(skip(self, input))]
    pub async fn update_task(&self, id: ObjectId, input: UpdateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a task
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: ObjectId) -> TaskResult<()> {
        self.repository.delete(id).await
    }
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;

    #[tokio::test]
    async fn test_create_task_rejects_empty_title_before_repository() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create().never();

        let service = TaskService::new(repo);
        let result = service
            .create_task(CreateTask {
                title: String::new(),
                completed: false,
            })
            .await;

        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_task_dispatches_valid_input() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create()
            .withf(|input| input.title == "Buy milk")
            .times(1)
            .returning(|input| Ok(Task::new(input)));

        let service = TaskService::new(repo);
        let task = service
            .create_task(CreateTask {
                title: "Buy milk".to_string(),
                completed: false,
            })
            .await
            .unwrap();

        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn test_get_task_missing_is_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = TaskService::new(repo);
        let result = service.get_task(ObjectId::new()).await;

        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_task_rejects_invalid_input_before_repository() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update().never();

        let service = TaskService::new(repo);
        let result = service
            .update_task(
                ObjectId::new(),
                UpdateTask {
                    title: Some(String::new()),
                    completed: None,
                },
            )
            .await;

        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_tasks_propagates_database_error() {
        let mut repo = MockTaskRepository::new();
        repo.expect_list()
            .returning(|| Err(TaskError::Database("connection refused".to_string())));

        let service = TaskService::new(repo);
        let result = service.list_tasks().await;

        assert!(matches!(result, Err(TaskError::Database(_))));
    }
}
