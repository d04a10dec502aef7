use crate::config::Config;
use crate::mongo::MongoClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub mongo: MongoClient,
    pub config: Arc<Config>,
}
