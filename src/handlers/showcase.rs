//! Handlers for the storefront showcase collections: gallery images, top
//! sellers, and best-selling toys. All three are simple append-and-list
//! stores with no per-document routes.

use crate::error::{ApiError, ErrorResponse};
use crate::models::InsertResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use mongodb::bson::Document;

/// GET /gallery-images handler
#[utoipa::path(
    get,
    path = routes::GALLERY_IMAGES,
    responses(
        (status = 200, description = "All gallery image documents", body = [serde_json::Value]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn list_gallery_images_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Document>>), ApiError> {
    let images = state.mongo.list_gallery_images().await?;

    tracing::info!("Listed {} gallery images", images.len());
    Ok((StatusCode::OK, Json(images)))
}

/// POST /gallery-images handler
#[utoipa::path(
    post,
    path = routes::GALLERY_IMAGES,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Id of the stored document", body = InsertResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn create_gallery_image_handler(
    State(state): State<AppState>,
    Json(image): Json<Document>,
) -> Result<(StatusCode, Json<InsertResponse>), ApiError> {
    let result = state.mongo.insert_gallery_image(image).await?;

    tracing::info!("Inserted gallery image");
    Ok((StatusCode::OK, Json(InsertResponse::from(result))))
}

/// GET /top-sellers handler
#[utoipa::path(
    get,
    path = routes::TOP_SELLERS,
    responses(
        (status = 200, description = "All top seller documents", body = [serde_json::Value]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn list_top_sellers_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Document>>), ApiError> {
    let sellers = state.mongo.list_top_sellers().await?;

    tracing::info!("Listed {} top sellers", sellers.len());
    Ok((StatusCode::OK, Json(sellers)))
}

/// POST /top-sellers handler
#[utoipa::path(
    post,
    path = routes::TOP_SELLERS,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Id of the stored document", body = InsertResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn create_top_seller_handler(
    State(state): State<AppState>,
    Json(seller): Json<Document>,
) -> Result<(StatusCode, Json<InsertResponse>), ApiError> {
    let result = state.mongo.insert_top_seller(seller).await?;

    tracing::info!("Inserted top seller");
    Ok((StatusCode::OK, Json(InsertResponse::from(result))))
}

/// GET /best-selling-toys handler
#[utoipa::path(
    get,
    path = routes::BEST_SELLING_TOYS,
    responses(
        (status = 200, description = "All best-selling toy documents", body = [serde_json::Value]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn list_best_selling_toys_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Document>>), ApiError> {
    let toys = state.mongo.list_best_selling_toys().await?;

    tracing::info!("Listed {} best-selling toys", toys.len());
    Ok((StatusCode::OK, Json(toys)))
}

/// POST /best-selling-toys handler
#[utoipa::path(
    post,
    path = routes::BEST_SELLING_TOYS,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Id of the stored document", body = InsertResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn create_best_selling_toy_handler(
    State(state): State<AppState>,
    Json(toy): Json<Document>,
) -> Result<(StatusCode, Json<InsertResponse>), ApiError> {
    let result = state.mongo.insert_best_selling_toy(toy).await?;

    tracing::info!("Inserted best-selling toy");
    Ok((StatusCode::OK, Json(InsertResponse::from(result))))
}
