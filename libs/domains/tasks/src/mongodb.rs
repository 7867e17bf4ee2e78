//! MongoDB implementation of TaskRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};
use tracing::instrument;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// MongoDB implementation of the TaskRepository.
///
/// Documents live in the `tasks` collection with `_id` holding the hex form
/// of the assigned ObjectId.
pub struct MongoTaskRepository {
    collection: Collection<Task>,
}

impl MongoTaskRepository {
    /// Create a repository over the default `tasks` collection.
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("todo");
    /// let repo = MongoTaskRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Task>("tasks");
        Self { collection }
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Task>(collection_name);
        Self { collection }
    }

    fn id_filter(id: &ObjectId) -> mongodb::bson::Document {
        doc! { "_id": id.to_hex() }
    }
}

#[async_trait]
impl TaskRepository for MongoTaskRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> TaskResult<Vec<Task>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let tasks: Vec<Task> = cursor.try_collect().await?;

        Ok(tasks)
    }

    #[instrument(skip(self, input), fields(task_title = %input.title))]
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let task = Task::new(input);

        self.collection.insert_one(&task).await?;

        tracing::info!(task_id = %task.id, "Task created");
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> TaskResult<Option<Task>> {
        let task = self.collection.find_one(Self::id_filter(&id)).await?;
        Ok(task)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: UpdateTask) -> TaskResult<Task> {
        let filter = Self::id_filter(&id);
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(TaskError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(task_id = %id, "Task updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> TaskResult<()> {
        let result = self.collection.delete_one(Self::id_filter(&id)).await?;

        // deleted_count distinguishes not-found from success
        if result.deleted_count == 0 {
            return Err(TaskError::NotFound(id));
        }

        tracing::info!(task_id = %id, "Task deleted");
        Ok(())
    }
}
