use crate::domain::ports::person_repository::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    MalformattedId,
    PersonNotFound,
    Validation(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MalformattedId => write!(f, "malformatted id"),
            ApiError::PersonNotFound => write!(f, "Person not found"),
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MalformattedId => (StatusCode::BAD_REQUEST, "malformatted id".to_string()),
            ApiError::PersonNotFound => (StatusCode::NOT_FOUND, "Person not found".to_string()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// Every store failure funnels through this one mapping.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId => ApiError::MalformattedId,
            StoreError::NotFound => ApiError::PersonNotFound,
            StoreError::Validation(details) => ApiError::Validation(details.to_string()),
            StoreError::Unexpected(cause) => {
                tracing::error!("unhandled store error: {}", cause);
                ApiError::Internal(cause.to_string())
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
