mod dynamo;
mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CreateTodoRequest, Todo, UpdateTodoRequest, ValidationError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Backend(String),
}

impl From<ValidationError> for StoreError {
    fn from(e: ValidationError) -> Self {
        StoreError::Validation(e.0)
    }
}

/// Document-store interface for todo records.
///
/// The store owns persistence and identifier assignment. Writes run schema
/// validation and defaulting before anything is persisted, so a record is
/// either stored fully valid or not stored at all. Identifiers are opaque
/// strings; looking up an id the store never issued simply misses.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Todo, StoreError>;

    /// Validates `input`, assigns a fresh id and persists the record.
    async fn create(&self, input: CreateTodoRequest) -> Result<Todo, StoreError>;

    /// Validates the supplied fields and applies them to the existing record
    /// in a single write. Returns the post-update record.
    async fn update(&self, id: &str, input: UpdateTodoRequest) -> Result<Todo, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
