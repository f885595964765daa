use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Message returned for every lookup that matches no row
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned with every 404: `{"detail": "Not found"}`
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotFoundResponse {
    pub detail: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub ok: bool,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every handler returns this on failure so that status codes and the
/// JSON error body stay consistent across both item surfaces.
#[derive(Debug)]
pub enum ApiError {
    /// Path identifier is not an integer
    InvalidId(String),
    /// Payload passed type checks but breaks a field constraint
    InvalidPayload(String),
    /// No row matches the addressed identifier
    NotFound,
    /// Database operation error
    DatabaseError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound => {
                let body = Json(NotFoundResponse {
                    detail: NOT_FOUND_MESSAGE.to_string(),
                });
                return (StatusCode::NOT_FOUND, body).into_response();
            }
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid item id: expected an integer, got '{}'", id),
            ),
            ApiError::InvalidPayload(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid payload: {}", msg),
            ),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}
