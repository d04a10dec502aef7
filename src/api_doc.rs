use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{DeleteResponse, InsertResponse, UpdateResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "toy-mart-server API",
        version = "1.0.0",
        description = "Pass-through REST endpoints over the toy-mart MongoDB collections"
    ),
    paths(
        handlers::health::root_handler,
        handlers::health::health_handler,
        handlers::sub_category::list_sub_categories_handler,
        handlers::sub_category::create_sub_category_handler,
        handlers::toys::list_toys_handler,
        handlers::toys::list_toys_by_owner_handler,
        handlers::toys::list_toys_by_sub_category_handler,
        handlers::toys::create_toy_handler,
        handlers::toy_item::get_toy_handler,
        handlers::toy_item::update_toy_handler,
        handlers::toy_item::delete_toy_handler,
        handlers::showcase::list_gallery_images_handler,
        handlers::showcase::create_gallery_image_handler,
        handlers::showcase::list_top_sellers_handler,
        handlers::showcase::create_top_seller_handler,
        handlers::showcase::list_best_selling_toys_handler,
        handlers::showcase::create_best_selling_toy_handler
    ),
    components(
        schemas(
            InsertResponse,
            UpdateResponse,
            DeleteResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness and health check operations"),
        (name = "toys", description = "Toy listing operations"),
        (name = "catalog", description = "Sub-categories and storefront showcase collections")
    )
)]
pub struct ApiDoc;
