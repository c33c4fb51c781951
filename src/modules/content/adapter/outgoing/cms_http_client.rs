use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::modules::content::adapter::outgoing::cms_config::CmsConfig;
use crate::modules::content::application::ports::outgoing::{
    ContentClient, ContentClientError, ItemsResult,
};
use crate::modules::content::domain::Collection;

/// Read-only HTTP client for the hosted content store.
///
/// Endpoints:
/// - `GET {base}/collections/{collection}/items` → `{"items": [...]}`
/// - `GET {base}/collections/{collection}/items/{id}` → `{"item": {...}}` or the bare record
#[derive(Clone)]
pub struct CmsHttpClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl CmsHttpClient {
    pub fn new(config: &CmsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Reuses an existing [`reqwest::Client`] connection pool.
    pub fn with_client(client: reqwest::Client, config: &CmsConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// `{base}/collections/{collection}/items[/{id}]`, each part encoded as
    /// a single path segment.
    fn collection_url(&self, collection: Collection, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["collections", collection.as_str(), "items"]);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    async fn get_json(&self, url: Url) -> Result<Value, ContentClientError> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentClientError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ContentClientError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(map_status(status, body));
        }

        serde_json::from_str(&body).map_err(|e| ContentClientError::Decode(e.to_string()))
    }
}

fn map_status(status: u16, body: String) -> ContentClientError {
    match status {
        404 => ContentClientError::NotFound,
        401 | 403 => ContentClientError::Unauthorized,
        _ => ContentClientError::UnexpectedStatus { status, body },
    }
}

fn unwrap_single_item(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("item") => {
            map.remove("item").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[async_trait]
impl ContentClient for CmsHttpClient {
    async fn get_all(&self, collection: Collection) -> Result<ItemsResult<Value>, ContentClientError> {
        let body = self.get_json(self.collection_url(collection, None)).await?;
        serde_json::from_value(body).map_err(|e| ContentClientError::Decode(e.to_string()))
    }

    async fn get_by_id(&self, collection: Collection, id: &str) -> Result<Value, ContentClientError> {
        // Dot segments would be dropped from the path and hit the list endpoint.
        if matches!(id, "." | "..") {
            return Err(ContentClientError::NotFound);
        }
        let body = self.get_json(self.collection_url(collection, Some(id))).await?;
        match unwrap_single_item(body) {
            Value::Null => Err(ContentClientError::NotFound),
            item => Ok(item),
        }
    }

    async fn ping(&self) -> Result<(), ContentClientError> {
        self.get_json(self.collection_url(Collection::Stats, None))
            .await
            .map(|_| ())
    }
}
