use anyhow::{Context, Result};
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::{Client, Collection, Database};

use crate::config::Config;

/// Collection names in the storefront database.
pub mod collections {
    pub const TOYS: &str = "toys";
    pub const GALLERY_IMAGES: &str = "gallery-images";
    pub const TOP_SELLERS: &str = "top-sellers";
    pub const BEST_SELLING_TOYS: &str = "best-selling-toys";
    pub const SUB_CATEGORIES: &str = "sub-category";
}

/// Fields returned when a single toy is fetched by id.
const TOY_PROJECTION_FIELDS: &[&str] = &[
    "_id",
    "toyUrl",
    "toyName",
    "sellerName",
    "email",
    "subCategory",
    "price",
    "rating",
    "quantity",
    "description",
];

/// Fields written by a toy update. `sellerName` is fixed at listing time
/// and stays out of this list.
const TOY_UPDATE_FIELDS: &[&str] = &[
    "toyUrl",
    "toyName",
    "email",
    "subCategory",
    "price",
    "rating",
    "quantity",
    "description",
];

fn toy_projection() -> Document {
    TOY_PROJECTION_FIELDS
        .iter()
        .map(|field| (field.to_string(), Bson::Int32(1)))
        .collect()
}

/// Build the `$set` document for a toy update from the request body.
///
/// The full field list is always written; values the body omits become
/// null.
fn toy_update_set(update: &Document) -> Document {
    TOY_UPDATE_FIELDS
        .iter()
        .map(|field| {
            (
                field.to_string(),
                update.get(*field).cloned().unwrap_or(Bson::Null),
            )
        })
        .collect()
}

/// Shareable MongoDB client for use across async handlers
///
/// `mongodb::Client` keeps its own internal connection pool and is cheap to
/// clone, so no extra wrapping is needed.
#[derive(Clone)]
pub struct MongoClient {
    client: Client,
    db: Database,
}

impl MongoClient {
    /// Create a new MongoDB client from configuration
    ///
    /// This parses the connection string the config assembles (or the
    /// `MONGODB_URI` override), pins the client to Stable API v1, and sends
    /// a `{ping: 1}` to the `admin` database so a bad deployment is caught
    /// at startup rather than on the first request.
    ///
    /// The client is opened once at startup and shared by every handler for
    /// the process lifetime; it is never explicitly closed.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut options = ClientOptions::parse(config.connection_uri())
            .await
            .context("Failed to parse MongoDB connection string")?;
        options.app_name = Some("toy-mart-server".to_string());
        // Stable API v1, strict mode with deprecation errors.
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client =
            Client::with_options(options).context("Failed to create MongoDB client")?;
        let db = client.database(&config.database);

        // Send a ping to confirm a successful connection before serving.
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .context("Failed to ping MongoDB deployment")?;

        tracing::info!("Pinged your deployment. You successfully connected to MongoDB!");

        Ok(Self { client, db })
    }

    /// Get a handle to the underlying database
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Perform a health check with a `{ping: 1}` round trip
    ///
    /// This runs the same lightweight admin command as the startup ping to
    /// verify the deployment is still reachable.
    ///
    /// # Returns
    /// * `Ok(())` - Deployment is reachable and responsive
    /// * `Err(_)` - Ping failed
    ///
    /// # Errors
    /// Returns an error if the admin command cannot be executed
    pub async fn health_check(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .context("Failed to execute health check ping")?;

        tracing::debug!("Health check ping succeeded");
        Ok(())
    }

    fn toys(&self) -> Collection<Document> {
        self.db.collection(collections::TOYS)
    }

    fn sub_categories(&self) -> Collection<Document> {
        self.db.collection(collections::SUB_CATEGORIES)
    }

    fn gallery_images(&self) -> Collection<Document> {
        self.db.collection(collections::GALLERY_IMAGES)
    }

    fn top_sellers(&self) -> Collection<Document> {
        self.db.collection(collections::TOP_SELLERS)
    }

    fn best_selling_toys(&self) -> Collection<Document> {
        self.db.collection(collections::BEST_SELLING_TOYS)
    }

    /// Drain a query cursor into memory, the `find().toArray()` shape every
    /// list route is built on.
    async fn find_all(
        collection: Collection<Document>,
        filter: Document,
    ) -> mongodb::error::Result<Vec<Document>> {
        let cursor = collection.find(filter).await?;
        cursor.try_collect().await
    }

    /// All sub-categories, unfiltered.
    pub async fn list_sub_categories(&self) -> Result<Vec<Document>> {
        Self::find_all(self.sub_categories(), doc! {})
            .await
            .context("Failed to list sub-categories")
    }

    pub async fn insert_sub_category(&self, document: Document) -> Result<InsertOneResult> {
        self.sub_categories()
            .insert_one(document)
            .await
            .context("Failed to insert sub-category")
    }

    /// All toys, unfiltered.
    pub async fn list_toys(&self) -> Result<Vec<Document>> {
        Self::find_all(self.toys(), doc! {})
            .await
            .context("Failed to list toys")
    }

    /// List toys whose `subCategory` field equals the given sub-category id
    ///
    /// The id is matched as the opaque string the client stored; it is not
    /// checked against the `sub-category` collection.
    ///
    /// # Arguments
    /// * `sub_category_id` - Sub-category value to match exactly
    ///
    /// # Errors
    /// Returns an error if the find operation fails
    pub async fn list_toys_by_sub_category(&self, sub_category_id: &str) -> Result<Vec<Document>> {
        Self::find_all(self.toys(), doc! { "subCategory": sub_category_id })
            .await
            .context("Failed to list toys by sub-category")
    }

    /// List toys owned by the given email, or every toy when no email is
    /// given
    ///
    /// # Arguments
    /// * `email` - Owner email to match exactly (None = all toys)
    ///
    /// # Errors
    /// Returns an error if the find operation fails
    pub async fn list_toys_by_owner(&self, email: Option<&str>) -> Result<Vec<Document>> {
        let filter = match email {
            Some(email) => doc! { "email": email },
            None => doc! {},
        };

        Self::find_all(self.toys(), filter)
            .await
            .context("Failed to list toys by owner")
    }

    /// Fetch a single toy by its ObjectId, restricted to the storefront
    /// field set
    ///
    /// # Arguments
    /// * `id` - ObjectId of the toy to retrieve
    ///
    /// # Returns
    /// * `Ok(Some(document))` - Toy found, projected fields only
    /// * `Ok(None)` - No toy with that id
    /// * `Err(_)` - Query failed
    ///
    /// # Errors
    /// Returns an error if the find operation fails
    pub async fn find_toy(&self, id: ObjectId) -> Result<Option<Document>> {
        let toy = self
            .toys()
            .find_one(doc! { "_id": id })
            .projection(toy_projection())
            .await
            .context("Failed to fetch toy")?;

        tracing::debug!("Fetched toy {}: found={}", id, toy.is_some());
        Ok(toy)
    }

    pub async fn insert_toy(&self, document: Document) -> Result<InsertOneResult> {
        self.toys()
            .insert_one(document)
            .await
            .context("Failed to insert toy")
    }

    /// Replace the updatable field set of a toy, inserting the document when
    /// the id is unknown (upsert)
    ///
    /// The `$set` always covers the whole updatable field list; fields the
    /// body omits are written as null and `sellerName` is never touched.
    ///
    /// # Arguments
    /// * `id` - ObjectId of the toy to update or create
    /// * `update` - Request body the new field values are taken from
    ///
    /// # Errors
    /// Returns an error if the update operation fails
    pub async fn update_toy(&self, id: ObjectId, update: &Document) -> Result<UpdateResult> {
        let result = self
            .toys()
            .update_one(doc! { "_id": id }, doc! { "$set": toy_update_set(update) })
            .upsert(true)
            .await
            .context("Failed to update toy")?;

        tracing::debug!(
            "Updated toy {}: matched {}, modified {}, upserted {:?}",
            id,
            result.matched_count,
            result.modified_count,
            result.upserted_id,
        );
        Ok(result)
    }

    /// Delete a single toy by its ObjectId
    ///
    /// # Arguments
    /// * `id` - ObjectId of the toy to delete
    ///
    /// # Returns
    /// * `DeleteResult` - Carries the deleted count (0 when nothing matched)
    ///
    /// # Errors
    /// Returns an error if the delete operation fails
    pub async fn delete_toy(&self, id: ObjectId) -> Result<DeleteResult> {
        let result = self
            .toys()
            .delete_one(doc! { "_id": id })
            .await
            .context("Failed to delete toy")?;

        tracing::debug!("Deleted toy {}: deleted {}", id, result.deleted_count);
        Ok(result)
    }

    pub async fn list_gallery_images(&self) -> Result<Vec<Document>> {
        Self::find_all(self.gallery_images(), doc! {})
            .await
            .context("Failed to list gallery images")
    }

    pub async fn insert_gallery_image(&self, document: Document) -> Result<InsertOneResult> {
        self.gallery_images()
            .insert_one(document)
            .await
            .context("Failed to insert gallery image")
    }

    pub async fn list_top_sellers(&self) -> Result<Vec<Document>> {
        Self::find_all(self.top_sellers(), doc! {})
            .await
            .context("Failed to list top sellers")
    }

    pub async fn insert_top_seller(&self, document: Document) -> Result<InsertOneResult> {
        self.top_sellers()
            .insert_one(document)
            .await
            .context("Failed to insert top seller")
    }

    pub async fn list_best_selling_toys(&self) -> Result<Vec<Document>> {
        Self::find_all(self.best_selling_toys(), doc! {})
            .await
            .context("Failed to list best-selling toys")
    }

    pub async fn insert_best_selling_toy(&self, document: Document) -> Result<InsertOneResult> {
        self.best_selling_toys()
            .insert_one(document)
            .await
            .context("Failed to insert best-selling toy")
    }
}
