use crate::error::{ApiError, ErrorResponse};
use crate::models::{DeleteResponse, UpdateResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;

/// GET /toys/{id} handler - Fetch one toy, restricted to the storefront
/// field set
///
/// The body is the projected document, or JSON null when nothing matches.
#[utoipa::path(
    get,
    path = routes::TOY_ITEM,
    params(
        ("id" = String, Path, description = "ObjectId of the toy")
    ),
    responses(
        (status = 200, description = "Projected toy document, or null", body = serde_json::Value),
        (status = 400, description = "Invalid ObjectId format", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "toys"
)]
pub async fn get_toy_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Option<Document>>), ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidObjectId(id_str.clone()))?;

    let toy = state.mongo.find_toy(id).await?;

    tracing::info!("Fetched toy {} (found: {})", id, toy.is_some());
    Ok((StatusCode::OK, Json(toy)))
}

/// PUT /toys/{id} handler - Replace the updatable toy fields, creating the
/// document when the id is unknown (upsert)
#[utoipa::path(
    put,
    path = routes::TOY_ITEM,
    params(
        ("id" = String, Path, description = "ObjectId of the toy")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Update result", body = UpdateResponse),
        (status = 400, description = "Invalid ObjectId format", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "toys"
)]
pub async fn update_toy_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(update): Json<Document>,
) -> Result<(StatusCode, Json<UpdateResponse>), ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidObjectId(id_str.clone()))?;

    let result = state.mongo.update_toy(id, &update).await?;

    tracing::info!("Updated toy {}", id);
    Ok((StatusCode::OK, Json(UpdateResponse::from(result))))
}

/// DELETE /toys/{id} handler - Delete one toy
#[utoipa::path(
    delete,
    path = routes::TOY_ITEM,
    params(
        ("id" = String, Path, description = "ObjectId of the toy")
    ),
    responses(
        (status = 200, description = "Delete result", body = DeleteResponse),
        (status = 400, description = "Invalid ObjectId format", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "toys"
)]
pub async fn delete_toy_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidObjectId(id_str.clone()))?;

    let result = state.mongo.delete_toy(id).await?;

    tracing::info!("Deleted toy {}", id);
    Ok((StatusCode::OK, Json(DeleteResponse::from(result))))
}
