use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::modules::content::application::ports::outgoing::{
    ContentClient, ContentClientError, ItemsResult,
};
use crate::modules::content::domain::Collection;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fixture root must be an object keyed by collection name")]
    NotAnObject,

    #[error("Collection {0} must be an array of records")]
    NotAnArray(String),
}

/// Serves collections from memory.
///
/// Backs local development (`CMS_FIXTURE_FILE`) with a JSON document shaped
/// like `{"projects": [...], "skills": [...]}`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentClient {
    collections: Arc<HashMap<Collection, Vec<Value>>>,
}

impl InMemoryContentClient {
    pub fn new(collections: HashMap<Collection, Vec<Value>>) -> Self {
        Self {
            collections: Arc::new(collections),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, FixtureError> {
        let document: Value = serde_json::from_str(raw)?;
        let Value::Object(root) = document else {
            return Err(FixtureError::NotAnObject);
        };

        let mut collections = HashMap::new();
        for (name, records) in root {
            let collection = match name.parse::<Collection>() {
                Ok(collection) => collection,
                Err(err) => {
                    warn!("Ignoring fixture entry: {}", err);
                    continue;
                }
            };

            match records {
                Value::Array(items) => {
                    collections.insert(collection, items);
                }
                _ => return Err(FixtureError::NotAnArray(name)),
            }
        }

        Ok(Self::new(collections))
    }

    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[async_trait]
impl ContentClient for InMemoryContentClient {
    async fn get_all(&self, collection: Collection) -> Result<ItemsResult<Value>, ContentClientError> {
        let items = self
            .collections
            .get(&collection)
            .cloned()
            .unwrap_or_default();
        Ok(ItemsResult::new(items))
    }

    async fn get_by_id(&self, collection: Collection, id: &str) -> Result<Value, ContentClientError> {
        self.collections
            .get(&collection)
            .and_then(|items| {
                items
                    .iter()
                    .find(|item| item.get("_id").and_then(Value::as_str) == Some(id))
            })
            .cloned()
            .ok_or(ContentClientError::NotFound)
    }

    async fn ping(&self) -> Result<(), ContentClientError> {
        Ok(())
    }
}
