use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps the two failure classes the API produces to HTTP status codes and
/// a JSON `{"error": ...}` body: a toy id that does not parse as an
/// ObjectId, and anything the database driver reports.
#[derive(Debug)]
pub enum ApiError {
    /// Invalid ObjectId format in path parameter
    InvalidObjectId(String),
    /// Database operation error
    DatabaseError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidObjectId(id) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Invalid ObjectId: expected a 24-character hex string like '507f191e810c19729de860ea', got '{}'",
                    id
                ),
            ),
            ApiError::DatabaseError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<mongodb::bson::oid::Error> for ApiError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        ApiError::InvalidObjectId(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::DatabaseError(err.into())
    }
}
