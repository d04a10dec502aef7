use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::{Deserialize, Serialize};

/// Response type echoing the driver result of an insert
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertResponse {
    fn from(result: InsertOneResult) -> Self {
        Self {
            inserted_id: id_string(&result.inserted_id),
        }
    }
}

/// Response type echoing the driver result of an update/upsert
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
}

impl From<UpdateResult> for UpdateResponse {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().map(id_string),
        }
    }
}

/// Response type echoing the driver result of a delete
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResponse {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted_count: result.deleted_count,
        }
    }
}

/// Query parameters for GET /toy
#[derive(Deserialize, utoipa::ToSchema)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

impl OwnerQuery {
    /// Effective owner filter. A present-but-empty `email` (`/toy?email=`)
    /// counts as absent, so the route falls back to returning every toy.
    pub fn owner(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// Query parameters for GET /toy-data
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SubCategoryQuery {
    pub id: String,
}

/// Render a BSON id the way the HTTP API exposes ids: ObjectIds as their
/// 24-character hex form, everything else through its string form.
fn id_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn test_id_string_renders_object_ids_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(id_string(&Bson::ObjectId(oid)), oid.to_hex());
        assert_eq!(id_string(&Bson::String("custom-id".to_string())), "custom-id");
    }

    #[test]
    fn test_owner_query_treats_empty_email_as_absent() {
        use axum::extract::Query;
        use axum::http::Uri;

        // `/toy?email=` deserializes to Some(""), not None
        let uri: Uri = "/toy?email=".parse().unwrap();
        let Query(query) = Query::<OwnerQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.email, Some(String::new()));
        assert_eq!(query.owner(), None);

        let uri: Uri = "/toy?email=a@x.com".parse().unwrap();
        let Query(query) = Query::<OwnerQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.owner(), Some("a@x.com"));

        let uri: Uri = "/toy".parse().unwrap();
        let Query(query) = Query::<OwnerQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.email, None);
        assert_eq!(query.owner(), None);
    }

    #[test]
    fn test_insert_response_shape() {
        let response = InsertResponse {
            inserted_id: "507f191e810c19729de860ea".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "insertedId": "507f191e810c19729de860ea" })
        );
    }

    #[test]
    fn test_update_response_shape() {
        let response = UpdateResponse {
            matched_count: 1,
            modified_count: 1,
            upserted_id: None,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "matchedCount": 1, "modifiedCount": 1, "upsertedId": null })
        );
    }

    #[test]
    fn test_delete_response_shape() {
        let response = DeleteResponse { deleted_count: 0 };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "deletedCount": 0 })
        );
    }
}
