pub mod health;
pub mod showcase;
pub mod sub_category;
pub mod toy_item;
pub mod toys;

pub use health::{health_handler, root_handler};
pub use showcase::{
    create_best_selling_toy_handler, create_gallery_image_handler, create_top_seller_handler,
    list_best_selling_toys_handler, list_gallery_images_handler, list_top_sellers_handler,
};
pub use sub_category::{create_sub_category_handler, list_sub_categories_handler};
pub use toy_item::{delete_toy_handler, get_toy_handler, update_toy_handler};
pub use toys::{
    create_toy_handler, list_toys_by_owner_handler, list_toys_by_sub_category_handler,
    list_toys_handler,
};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::Config;
    use crate::mongo::MongoClient;
    use crate::routes;
    use crate::state::AppState;
    use axum::{body::Body, http::Request, response::Response, Router};
    use std::env;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Builds an app wired to a live MongoDB deployment, or `None` when
    /// `MONGODB_TEST_URI` is not set (the caller then skips the test).
    ///
    /// Each test passes its own database name so tests can run in
    /// parallel; the database is dropped up front so reruns start clean.
    pub async fn setup_test_app(database: &str) -> Option<Router> {
        let uri = match env::var("MONGODB_TEST_URI") {
            Ok(uri) => uri,
            Err(_) => {
                eprintln!("skipping: MONGODB_TEST_URI not set");
                return None;
            }
        };

        let config = Config {
            mongodb_uri: Some(uri),
            db_user: None,
            db_password: None,
            database: database.to_string(),
            service_port: 5000,
            service_host: "0.0.0.0".to_string(),
        };

        let mongo = MongoClient::from_config(&config)
            .await
            .expect("Failed to create MongoDB client");
        mongo
            .database()
            .drop()
            .await
            .expect("Failed to drop test database");

        let state = AppState {
            mongo,
            config: Arc::new(config),
        };
        Some(routes::router(state))
    }

    pub async fn post_json(app: Router, path: &str, body: &serde_json::Value) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }
}
