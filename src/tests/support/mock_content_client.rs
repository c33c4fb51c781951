use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::content::application::ports::outgoing::{
    ContentClient, ContentClientError, ItemsResult,
};
use crate::modules::content::domain::Collection;

/// Canned per-collection results. Collections that were not configured
/// answer with an empty list.
#[derive(Clone, Default)]
pub struct MockContentClient {
    results: HashMap<Collection, Result<Vec<Value>, ContentClientError>>,
    calls: Arc<Mutex<Vec<Collection>>>,
}

impl MockContentClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, collection: Collection, items: Vec<Value>) -> Self {
        self.results.insert(collection, Ok(items));
        self
    }

    pub fn with_failure(mut self, collection: Collection, err: ContentClientError) -> Self {
        self.results.insert(collection, Err(err));
        self
    }

    /// Collections requested so far, in call order.
    pub fn calls(&self) -> Vec<Collection> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, collection: Collection) {
        self.calls.lock().unwrap().push(collection);
    }
}

#[async_trait]
impl ContentClient for MockContentClient {
    async fn get_all(&self, collection: Collection) -> Result<ItemsResult<Value>, ContentClientError> {
        self.record(collection);
        match self.results.get(&collection) {
            Some(Ok(items)) => Ok(ItemsResult::new(items.clone())),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(ItemsResult::new(Vec::new())),
        }
    }

    async fn get_by_id(&self, collection: Collection, id: &str) -> Result<Value, ContentClientError> {
        self.record(collection);
        match self.results.get(&collection) {
            Some(Ok(items)) => items
                .iter()
                .find(|item| item.get("_id").and_then(Value::as_str) == Some(id))
                .cloned()
                .ok_or(ContentClientError::NotFound),
            Some(Err(err)) => Err(err.clone()),
            None => Err(ContentClientError::NotFound),
        }
    }

    async fn ping(&self) -> Result<(), ContentClientError> {
        match self.results.get(&Collection::Stats) {
            Some(Err(err)) => Err(err.clone()),
            _ => Ok(()),
        }
    }
}
