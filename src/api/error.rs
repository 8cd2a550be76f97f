/// HTTP error mapping
///
/// Every failing endpoint answers with `{ "error": "..." }` and a matching status.
/// Storage failures are logged here and never leak their cause to the caller.

use crate::registry::RegistryError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Worker not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => {
                tracing::debug!("Worker {} not found", id);
                ApiError::NotFound
            }
            RegistryError::Storage(e) => {
                tracing::error!("❌ Worker storage failure: {}", e);
                ApiError::Internal
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_map_to_statuses() {
        let not_found: ApiError = RegistryError::NotFound(3).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Worker not found");

        let storage: ApiError = RegistryError::Storage(sqlx::Error::PoolTimedOut).into();
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(storage.to_string(), "Internal Server Error");
    }
}
