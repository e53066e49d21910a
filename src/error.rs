use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

/// Handler-boundary error. Every failure a handler can produce maps onto
/// exactly one of these, and from there onto one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    /// Converts a store-layer error at the handler boundary. Backend detail
    /// is logged and replaced with `client_message`; clients only ever see
    /// a short description.
    pub fn from_store(err: StoreError, client_message: &str) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Validation(message) => ApiError::Validation(message),
            StoreError::Backend(detail) => {
                tracing::error!(error = %detail, "storage fault");
                ApiError::Storage(client_message.to_string())
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_expected_statuses() {
        let validation = ApiError::from_store(
            StoreError::Validation("Title is required".to_string()),
            "Failed to create todo",
        );
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.to_string(), "Title is required");

        let not_found = ApiError::from_store(StoreError::NotFound, "Failed to fetch todo");
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Todo not found");

        let storage = ApiError::from_store(
            StoreError::Backend("connection reset".to_string()),
            "Failed to fetch todo",
        );
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Backend detail stays out of the client-facing message.
        assert_eq!(storage.to_string(), "Failed to fetch todo");
    }
}
