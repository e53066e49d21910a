use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use ulid::Ulid;

use crate::models::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::store::{StoreError, TodoStore};

/// In-process store used for development and tests. Same contract as the
/// real document store, including validation on write and id assignment.
#[derive(Default)]
pub struct MemoryStore {
    todos: Mutex<HashMap<String, Todo>>,
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.lock().unwrap();
        Ok(todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Todo, StoreError> {
        let todos = self.todos.lock().unwrap();
        todos.get(id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create(&self, input: CreateTodoRequest) -> Result<Todo, StoreError> {
        let draft = input.validate()?;
        let todo = Todo {
            id: Ulid::new().to_string(),
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
        };

        let mut todos = self.todos.lock().unwrap();
        todos.insert(todo.id.clone(), todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: &str, input: UpdateTodoRequest) -> Result<Todo, StoreError> {
        let patch = input.validate()?;

        let mut todos = self.todos.lock().unwrap();
        let todo = todos.get_mut(id).ok_or(StoreError::NotFound)?;
        patch.apply(todo);
        Ok(todo.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut todos = self.todos.lock().unwrap();
        todos.remove(id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
