use crate::error::{ApiError, ErrorResponse};
use crate::models::InsertResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use mongodb::bson::Document;

/// GET /sub-category handler - List all toy sub-categories
#[utoipa::path(
    get,
    path = routes::SUB_CATEGORIES,
    responses(
        (status = 200, description = "All sub-category documents", body = [serde_json::Value]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn list_sub_categories_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Document>>), ApiError> {
    let sub_categories = state.mongo.list_sub_categories().await?;

    tracing::info!("Listed {} sub-categories", sub_categories.len());
    Ok((StatusCode::OK, Json(sub_categories)))
}

/// POST /sub-category handler - Store a sub-category document as-is
#[utoipa::path(
    post,
    path = routes::SUB_CATEGORIES,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Id of the stored document", body = InsertResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn create_sub_category_handler(
    State(state): State<AppState>,
    Json(sub_category): Json<Document>,
) -> Result<(StatusCode, Json<InsertResponse>), ApiError> {
    let result = state.mongo.insert_sub_category(sub_category).await?;

    tracing::info!("Inserted sub-category");
    Ok((StatusCode::OK, Json(InsertResponse::from(result))))
}
