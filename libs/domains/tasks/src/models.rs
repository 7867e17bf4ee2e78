use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Task entity - one todo item, stored in the `tasks` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier: the hex form of the store-assigned ObjectId.
    /// Immutable once created.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// The task's description
    pub title: String,
    /// Completion flag
    pub completed: bool,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// DTO for updating an existing task.
///
/// Carries no identifier field on purpose: an `_id` in the client payload is
/// dropped during deserialization, so the path identifier always wins and a
/// record's identity can never be reassigned through an update body.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 500))]
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    /// Create a new task from a CreateTask DTO, assigning a fresh identifier.
    pub fn new(input: CreateTask) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            title: input.title,
            completed: input.completed,
        }
    }

    /// Apply the fields present in an UpdateTask DTO, leaving the rest as-is.
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }
}
