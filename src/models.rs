use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A persisted todo record. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// POST /todos body. All fields optional at the serde layer so that the
/// schema, not the deserializer, decides what is valid.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Validated create input with defaults filled in, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl CreateTodoRequest {
    /// Checks the required fields and applies the schema defaults:
    /// `description` falls back to `""`, `completed` to `false`.
    pub fn validate(self) -> Result<TodoDraft, ValidationError> {
        let title = self
            .title
            .ok_or_else(|| ValidationError("Title is required".to_string()))?;
        if title.trim().is_empty() {
            return Err(ValidationError("Title cannot be empty".to_string()));
        }
        Ok(TodoDraft {
            title,
            description: self.description.unwrap_or_default(),
            completed: self.completed.unwrap_or(false),
        })
    }
}

/// PUT /todos/:id body. Absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Validated partial update. An empty patch is legal and leaves the
/// record unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    pub fn apply(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(description) = &self.description {
            todo.description = description.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

impl UpdateTodoRequest {
    /// A supplied title must be non-empty; everything else passes through.
    pub fn validate(self) -> Result<TodoPatch, ValidationError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ValidationError("Title cannot be empty".to_string()));
            }
        }
        Ok(TodoPatch {
            title: self.title,
            description: self.description,
            completed: self.completed,
        })
    }
}
