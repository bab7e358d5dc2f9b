use crate::{ApiClient, ApiError};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

///
/// StubClient
///
/// In-memory fixture store standing in for the REST transport. `search`
/// matches params against document fields, which is enough for the
/// `listName` lookups the wrappers perform.
///

#[derive(Debug, Default)]
pub struct StubClient {
    collections: BTreeMap<String, Vec<Value>>,
}

impl StubClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed (or replace) one collection's fixture documents.
    pub fn seed(&mut self, collection: &str, documents: Vec<Value>) {
        self.collections.insert(collection.to_owned(), documents);
    }

    fn collection(&self, collection: &str) -> Result<&[Value], ApiError> {
        self.collections
            .get(collection)
            .map(Vec::as_slice)
            .ok_or_else(|| ApiError::UnknownCollection(collection.to_owned()))
    }
}

impl ApiClient for StubClient {
    async fn get(&self, collection: &str, pk: &str) -> Result<Value, ApiError> {
        self.collection(collection)?
            .iter()
            .find(|doc| doc.get("_id").and_then(Value::as_str) == Some(pk))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("{collection}/{pk}")))
    }

    async fn list(
        &self,
        collection: &str,
        _list_name: Option<&str>,
        _fields: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Value, ApiError> {
        let docs = self.collection(collection)?;
        let limit = limit.unwrap_or(docs.len());

        Ok(json!({ "docs": docs.iter().take(limit).collect::<Vec<_>>() }))
    }

    async fn search(
        &self,
        collection: &str,
        params: &Map<String, Value>,
        _fields: Option<&str>,
    ) -> Result<Value, ApiError> {
        let docs: Vec<&Value> = self
            .collection(collection)?
            .iter()
            .filter(|doc| params.iter().all(|(key, value)| doc.get(key) == Some(value)))
            .collect();

        Ok(json!({ "docs": docs }))
    }
}
