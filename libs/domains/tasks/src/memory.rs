//! In-memory implementation of TaskRepository.
//!
//! The process-lifetime backend: tasks live in a Vec behind an async RwLock
//! and keep insertion order. Used for tests that must not require a running
//! database, and usable as a storage backend in its own right.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// In-memory TaskRepository over a `Vec<Task>`.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-populated with tasks.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> TaskResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    #[instrument(skip(self, input), fields(task_title = %input.title))]
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let task = Task::new(input);
        self.tasks.write().await.push(task.clone());
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> TaskResult<Option<Task>> {
        let hex = id.to_hex();
        Ok(self
            .tasks
            .read()
            .await
            .iter()
            .find(|task| task.id == hex)
            .cloned())
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: UpdateTask) -> TaskResult<Task> {
        let hex = id.to_hex();
        let mut tasks = self.tasks.write().await;

        let task = tasks
            .iter_mut()
            .find(|task| task.id == hex)
            .ok_or(TaskError::NotFound(id))?;

        task.apply_update(input);
        Ok(task.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> TaskResult<()> {
        let hex = id.to_hex();
        let mut tasks = self.tasks.write().await;

        let before = tasks.len();
        tasks.retain(|task| task.id != hex);

        if tasks.len() == before {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(title: &str) -> CreateTask {
        CreateTask {
            title: title.to_string(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryTaskRepository::new();
        repo.create(create("Buy milk")).await.unwrap();
        repo.create(create("Buy eggs")).await.unwrap();
        repo.create(create("Buy bread")).await.unwrap();

        let titles: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Buy milk", "Buy eggs", "Buy bread"]);
    }

    #[tokio::test]
    async fn test_update_flips_completed() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.create(create("Buy milk")).await.unwrap();
        let id = ObjectId::parse_str(&task.id).unwrap();

        let updated = repo
            .update(
                id,
                UpdateTask {
                    title: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Buy milk");
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.create(create("Buy milk")).await.unwrap();
        let id = ObjectId::parse_str(&task.id).unwrap();

        repo.delete(id).await.unwrap();
        assert!(matches!(repo.delete(id).await, Err(TaskError::NotFound(_))));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let repo = InMemoryTaskRepository::new();
        assert!(repo.get_by_id(ObjectId::new()).await.unwrap().is_none());
    }
}
