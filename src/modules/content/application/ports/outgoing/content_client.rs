// src/modules/content/application/ports/outgoing/content_client.rs

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::modules::content::domain::Collection;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemsResult<T> {
    pub items: Vec<T>,
    #[serde(rename = "totalCount", default)]
    pub total_count: Option<u64>,
}

impl<T> ItemsResult<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total_count = Some(items.len() as u64);
        Self { items, total_count }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentClientError {
    #[error("Item not found")]
    NotFound,

    #[error("Content store rejected credentials")]
    Unauthorized,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only access to named collections)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentClient: Send + Sync {
    /// Every item of a collection, in store order.
    async fn get_all(&self, collection: Collection) -> Result<ItemsResult<Value>, ContentClientError>;

    async fn get_by_id(&self, collection: Collection, id: &str) -> Result<Value, ContentClientError>;

    /// Cheap reachability check for the readiness endpoint.
    async fn ping(&self) -> Result<(), ContentClientError>;
}

#[async_trait]
impl<C> ContentClient for Arc<C>
where
    C: ContentClient + ?Sized,
{
    async fn get_all(&self, collection: Collection) -> Result<ItemsResult<Value>, ContentClientError> {
        (**self).get_all(collection).await
    }

    async fn get_by_id(&self, collection: Collection, id: &str) -> Result<Value, ContentClientError> {
        (**self).get_by_id(collection, id).await
    }

    async fn ping(&self) -> Result<(), ContentClientError> {
        (**self).ping().await
    }
}
