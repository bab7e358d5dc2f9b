//! Test support for the Gearbase API surface.
//!
//! Wraps an [`ApiClient`] with the defaults the test suites want: get the
//! first document when no pk is given, search by list name, unwrap `docs`
//! envelopes. Transport is out of scope for this layer; tests plug in the
//! in-memory [`StubClient`].

mod stub;

pub use stub::StubClient;

use serde_json::{Map, Value};
use thiserror::Error as ThisError;

///
/// ApiError
///

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("collection not found: {0}")]
    UnknownCollection(String),

    #[error("document not found: {0}")]
    NotFound(String),

    #[error("transport error: {0}")]
    Transport(String),
}

///
/// ApiClient
///
/// REST-style document client. `list` and `search` answer with a
/// `{"docs": [...]}` envelope. Implemented by transports elsewhere;
/// this crate only consumes it.
///

pub trait ApiClient {
    async fn get(&self, collection: &str, pk: &str) -> Result<Value, ApiError>;

    async fn list(
        &self,
        collection: &str,
        list_name: Option<&str>,
        fields: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Value, ApiError>;

    async fn search(
        &self,
        collection: &str,
        params: &Map<String, Value>,
        fields: Option<&str>,
    ) -> Result<Value, ApiError>;
}

/// Docs carried in a `{"docs": [...]}` envelope (or a bare array).
#[must_use]
pub fn docs(response: &Value) -> Vec<Value> {
    match response {
        Value::Array(docs) => docs.clone(),
        Value::Object(map) => map
            .get("docs")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// First doc of an envelope, `None` when it came back empty.
#[must_use]
pub fn first_doc(response: &Value) -> Option<Value> {
    docs(response).into_iter().next()
}

/// Get one document, or the first of the collection when `pk` is `None`.
pub async fn api_get<C: ApiClient>(
    client: &C,
    collection: &str,
    pk: Option<&str>,
) -> Result<Option<Value>, ApiError> {
    match pk {
        Some(pk) => client.get(collection, pk).await.map(Some),
        None => {
            let response = client.list(collection, None, None, Some(1)).await?;

            Ok(first_doc(&response))
        }
    }
}

/// List a collection, unwrapping the docs envelope.
pub async fn api_list<C: ApiClient>(
    client: &C,
    collection: &str,
    list_name: Option<&str>,
    fields: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<Value>, ApiError> {
    let response = client.list(collection, list_name, fields, limit).await?;

    Ok(docs(&response))
}

/// Search a collection, returning the raw envelope.
pub async fn api_search<C: ApiClient>(
    client: &C,
    collection: &str,
    params: &Map<String, Value>,
    fields: Option<&str>,
) -> Result<Value, ApiError> {
    client.search(collection, params, fields).await
}

/// First doc of a `listName` search, `None` when the search is empty.
async fn first_of_search<C: ApiClient>(
    client: &C,
    collection: &str,
    list_name: &str,
    fields: Option<&str>,
) -> Result<Option<Value>, ApiError> {
    let mut params = Map::new();
    params.insert("listName".to_owned(), Value::String(list_name.to_owned()));

    let response = client.search(collection, &params, fields).await?;

    Ok(first_doc(&response))
}

pub async fn get_any_contact<C: ApiClient>(client: &C) -> Result<Option<Value>, ApiError> {
    api_get(client, "customers", None).await
}

pub async fn get_any_attachment<C: ApiClient>(client: &C) -> Result<Option<Value>, ApiError> {
    api_get(client, "attachments", None).await
}

pub async fn get_any_location<C: ApiClient>(client: &C) -> Result<Option<Value>, ApiError> {
    api_get(client, "locations", None).await
}

pub async fn get_any_open_order<C: ApiClient>(client: &C) -> Result<Option<Value>, ApiError> {
    first_of_search(client, "orders", "open", Some("*")).await
}

pub async fn get_any_checked_out_item<C: ApiClient>(client: &C) -> Result<Option<Value>, ApiError> {
    first_of_search(client, "items", "checkedout", Some("*,location,category")).await
}

pub async fn get_any_available_item<C: ApiClient>(client: &C) -> Result<Option<Value>, ApiError> {
    first_of_search(client, "items", "available", Some("*,location,category")).await
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    fn seeded() -> StubClient {
        let mut client = StubClient::new();
        client.seed(
            "customers",
            vec![
                json!({"_id": "c1", "name": "Ada Lovelace"}),
                json!({"_id": "c2", "name": "Grace Hopper"}),
            ],
        );
        client.seed(
            "items",
            vec![
                json!({"_id": "i1", "name": "Canon C300", "listName": "available"}),
                json!({"_id": "i2", "name": "Sony FX6", "listName": "checkedout"}),
            ],
        );
        client.seed("orders", vec![]);
        client
    }

    #[test]
    fn api_get_with_pk_fetches_that_document() {
        let client = seeded();

        let doc = block_on(api_get(&client, "customers", Some("c2")))
            .unwrap()
            .unwrap();

        assert_eq!(doc["name"], "Grace Hopper");
    }

    #[test]
    fn api_get_without_pk_fetches_the_first_document() {
        let client = seeded();

        let doc = block_on(get_any_contact(&client)).unwrap().unwrap();

        assert_eq!(doc["_id"], "c1");
    }

    #[test]
    fn search_by_list_name_picks_matching_docs() {
        let client = seeded();

        let doc = block_on(get_any_available_item(&client)).unwrap().unwrap();
        assert_eq!(doc["_id"], "i1");

        let doc = block_on(get_any_checked_out_item(&client)).unwrap().unwrap();
        assert_eq!(doc["_id"], "i2");
    }

    #[test]
    fn empty_search_yields_none_not_an_error() {
        let client = seeded();

        assert!(block_on(get_any_open_order(&client)).unwrap().is_none());
    }

    #[test]
    fn unknown_collection_is_a_typed_error() {
        let client = seeded();

        let err = block_on(api_get(&client, "webhooks", None)).unwrap_err();

        assert!(matches!(err, ApiError::UnknownCollection(_)));
    }

    #[test]
    fn fetched_documents_load_straight_into_models() {
        use gearbase_core::model::Contact;

        let client = seeded();
        let doc = block_on(get_any_contact(&client)).unwrap().unwrap();

        let mut contact = Contact::new();
        contact.from_json(&doc).unwrap();

        assert_eq!(contact.id.as_deref(), Some("c1"));
        assert_eq!(contact.name, "Ada Lovelace");
        assert!(!contact.is_dirty());
    }
}
