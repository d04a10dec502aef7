use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const SUB_CATEGORIES: &str = "/sub-category";
pub const TOYS: &str = "/toys";
pub const TOY_ITEM: &str = "/toys/{id}";
pub const TOYS_BY_OWNER: &str = "/toy";
pub const TOYS_BY_SUB_CATEGORY: &str = "/toy-data";
pub const GALLERY_IMAGES: &str = "/gallery-images";
pub const TOP_SELLERS: &str = "/top-sellers";
pub const BEST_SELLING_TOYS: &str = "/best-selling-toys";

/// Assemble the application router: every storefront route, the Swagger UI,
/// per-request tracing, and CORS open to all origins.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(ROOT, get(handlers::root_handler))
        .route(HEALTH, get(handlers::health_handler))
        .route(
            SUB_CATEGORIES,
            get(handlers::list_sub_categories_handler)
                .post(handlers::create_sub_category_handler),
        )
        .route(
            TOYS,
            get(handlers::list_toys_handler).post(handlers::create_toy_handler),
        )
        .route(
            TOY_ITEM,
            get(handlers::get_toy_handler)
                .put(handlers::update_toy_handler)
                .delete(handlers::delete_toy_handler),
        )
        .route(TOYS_BY_OWNER, get(handlers::list_toys_by_owner_handler))
        .route(
            TOYS_BY_SUB_CATEGORY,
            get(handlers::list_toys_by_sub_category_handler),
        )
        .route(
            GALLERY_IMAGES,
            get(handlers::list_gallery_images_handler)
                .post(handlers::create_gallery_image_handler),
        )
        .route(
            TOP_SELLERS,
            get(handlers::list_top_sellers_handler).post(handlers::create_top_seller_handler),
        )
        .route(
            BEST_SELLING_TOYS,
            get(handlers::list_best_selling_toys_handler)
                .post(handlers::create_best_selling_toy_handler),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
