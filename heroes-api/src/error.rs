//! Error types for the API crate.

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use heroes_core::CoreError;
use heroes_store::StoreError;
use serde_json::json;

/// The kind of row a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Hero,
    Power,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Entity::Hero => "Hero",
            Entity::Power => "Power",
        })
    }
}

/// Errors that can occur during request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// No row with the requested id exists.
    #[error("{0} not found")]
    NotFound(Entity),

    /// A field value violates a domain constraint.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request body is malformed or lacks required fields.
    #[error("bad request: {}", .0.join("; "))]
    BadRequest(Vec<String>),

    /// The store failed for a reason unrelated to the request.
    #[error("store error: {0}")]
    Store(#[source] StoreError),
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(vec![message.into()])
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::HeroNotFound(_) => ApiError::NotFound(Entity::Hero),
            StoreError::PowerNotFound(_) => ApiError::NotFound(Entity::Power),
            err if err.is_validation() => ApiError::Validation(err.to_string()),
            err => ApiError::Store(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": format!("{entity} not found")})),
            )
                .into_response(),
            ApiError::Validation(detail) => {
                tracing::debug!(%detail, "rejected invalid field value");
                (StatusCode::BAD_REQUEST, Json(json!({"errors": ["validation errors"]})))
                    .into_response()
            }
            ApiError::BadRequest(messages) => {
                (StatusCode::BAD_REQUEST, Json(json!({"errors": messages}))).into_response()
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}
