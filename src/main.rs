mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod mongo;
mod routes;
mod state;

use anyhow::Context;
use config::Config;
use mongo::MongoClient;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("toy-mart-server starting");

    let config = Config::from_env()?;
    config.log_startup();

    let mongo = MongoClient::from_config(&config).await?;

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        mongo,
        config: Arc::new(config),
    };

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("Toy mart server listening on {}", addr);

    axum::serve(listener, routes::router(state))
        .await
        .context("Server error")?;

    Ok(())
}
