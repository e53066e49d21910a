use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use ulid::Ulid;

use crate::models::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::store::{StoreError, TodoStore};

/// DynamoDB-backed store. One table, partition key `id`.
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub async fn new(table_name: &str) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl TodoStore for DynamoStore {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        // Rows that do not parse as a Todo are skipped rather than failing
        // the whole listing.
        let todos = result.items().iter().filter_map(item_to_todo).collect();

        Ok(todos)
    }

    async fn find_by_id(&self, id: &str) -> Result<Todo, StoreError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let item = result.item().ok_or(StoreError::NotFound)?;
        item_to_todo(item).ok_or_else(|| StoreError::Backend("Failed to parse stored item".to_string()))
    }

    async fn create(&self, input: CreateTodoRequest) -> Result<Todo, StoreError> {
        let draft = input.validate()?;
        let todo = Todo {
            id: Ulid::new().to_string(),
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
        };

        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(todo.id.clone()))
            .item("title", AttributeValue::S(todo.title.clone()))
            .item("description", AttributeValue::S(todo.description.clone()))
            .item("completed", AttributeValue::Bool(todo.completed))
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(todo)
    }

    async fn update(&self, id: &str, input: UpdateTodoRequest) -> Result<Todo, StoreError> {
        let patch = input.validate()?;
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut update_parts = Vec::new();
        let mut builder = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .condition_expression("attribute_exists(id)")
            .return_values(ReturnValue::AllNew);

        if let Some(title) = patch.title {
            update_parts.push("#title = :title");
            builder = builder
                .expression_attribute_names("#title", "title")
                .expression_attribute_values(":title", AttributeValue::S(title));
        }

        if let Some(description) = patch.description {
            update_parts.push("#description = :description");
            builder = builder
                .expression_attribute_names("#description", "description")
                .expression_attribute_values(":description", AttributeValue::S(description));
        }

        if let Some(completed) = patch.completed {
            update_parts.push("#completed = :completed");
            builder = builder
                .expression_attribute_names("#completed", "completed")
                .expression_attribute_values(":completed", AttributeValue::Bool(completed));
        }

        let expression = format!("SET {}", update_parts.join(", "));
        let result = builder
            .update_expression(expression)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    StoreError::NotFound
                } else {
                    StoreError::Backend(service_error.to_string())
                }
            })?;

        let item = result
            .attributes()
            .ok_or_else(|| StoreError::Backend("Update returned no attributes".to_string()))?;
        item_to_todo(item)
            .ok_or_else(|| StoreError::Backend("Failed to parse updated item".to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        // AllOld is empty when no item existed under this key.
        if result.attributes().is_none() {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Option<Todo> {
    Some(Todo {
        id: item.get("id")?.as_s().ok()?.clone(),
        title: item.get("title")?.as_s().ok()?.clone(),
        description: item.get("description")?.as_s().ok()?.clone(),
        completed: *item.get("completed")?.as_bool().ok()?,
    })
}
