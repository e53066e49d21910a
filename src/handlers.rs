use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{CreateTodoRequest, UpdateTodoRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthBody { status: "ok" }))
}

/// GET /todos
pub async fn list_todos(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let todos = state
        .store
        .find_all()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch todos"))?;

    Ok((StatusCode::OK, Json(todos)))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let todo = state
        .store
        .create(input)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to create todo"))?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos/:id
pub async fn get_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state
        .store
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch todo"))?;

    Ok((StatusCode::OK, Json(todo)))
}

/// PUT /todos/:id
pub async fn update_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let todo = state
        .store
        .update(&id, input)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to update todo"))?;

    Ok((StatusCode::OK, Json(todo)))
}

/// DELETE /todos/:id
pub async fn delete_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .store
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to delete todo"))?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Todo deleted successfully" })),
    ))
}
