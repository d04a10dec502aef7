use crate::error::{ApiError, ErrorResponse};
use crate::models::{InsertResponse, OwnerQuery, SubCategoryQuery};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};
use mongodb::bson::Document;

/// GET /toys handler - Retrieve all toys
#[utoipa::path(
    get,
    path = routes::TOYS,
    responses(
        (status = 200, description = "Every toy document", body = [serde_json::Value]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "toys"
)]
pub async fn list_toys_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Document>>), ApiError> {
    let toys = state.mongo.list_toys().await?;

    tracing::info!("Listed {} toys", toys.len());
    Ok((StatusCode::OK, Json(toys)))
}

/// GET /toy handler - Toys for one owner email, or all toys when the
/// filter is absent or empty
#[utoipa::path(
    get,
    path = routes::TOYS_BY_OWNER,
    params(
        ("email" = Option<String>, Query, description = "Owner email to filter by; absent or empty returns all toys")
    ),
    responses(
        (status = 200, description = "Matching toy documents", body = [serde_json::Value]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "toys"
)]
pub async fn list_toys_by_owner_handler(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<(StatusCode, Json<Vec<Document>>), ApiError> {
    let toys = state.mongo.list_toys_by_owner(query.owner()).await?;

    tracing::info!("Listed {} toys (owner: {:?})", toys.len(), query.owner());
    Ok((StatusCode::OK, Json(toys)))
}

/// GET /toy-data handler - Toys belonging to one sub-category
#[utoipa::path(
    get,
    path = routes::TOYS_BY_SUB_CATEGORY,
    params(
        ("id" = String, Query, description = "Sub-category id the toys reference")
    ),
    responses(
        (status = 200, description = "Matching toy documents", body = [serde_json::Value]),
        (status = 400, description = "Missing id query parameter", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "toys"
)]
pub async fn list_toys_by_sub_category_handler(
    State(state): State<AppState>,
    Query(query): Query<SubCategoryQuery>,
) -> Result<(StatusCode, Json<Vec<Document>>), ApiError> {
    let toys = state.mongo.list_toys_by_sub_category(&query.id).await?;

    tracing::info!("Listed {} toys (subCategory: {})", toys.len(), query.id);
    Ok((StatusCode::OK, Json(toys)))
}

/// POST /toys handler - Insert a toy document as received
#[utoipa::path(
    post,
    path = routes::TOYS,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Toy stored", body = InsertResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "toys"
)]
pub async fn create_toy_handler(
    State(state): State<AppState>,
    Json(toy): Json<Document>,
) -> Result<(StatusCode, Json<InsertResponse>), ApiError> {
    let result = state.mongo.insert_toy(toy).await?;
    let response = InsertResponse::from(result);

    tracing::info!("Inserted toy {}", response.inserted_id);
    Ok((StatusCode::OK, Json(response)))
}
