use serde_json::Value;
use tracing::{error, warn};

use crate::modules::content::application::ports::outgoing::{ContentClient, ContentClientError};
use crate::modules::content::domain::{Collection, CollectionEntity};

/// Typed reads on top of a [`ContentClient`].
#[derive(Clone)]
pub struct ContentQuery<C>
where
    C: ContentClient,
{
    client: C,
}

impl<C> ContentQuery<C>
where
    C: ContentClient,
{
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Loads a whole collection. Records that do not decode are skipped.
    pub async fn fetch_all<T>(&self) -> Result<Vec<T>, ContentClientError>
    where
        T: CollectionEntity,
    {
        let result = self.client.get_all(T::COLLECTION).await?;
        Ok(decode_items(T::COLLECTION, result.items))
    }

    /// Like [`fetch_all`](Self::fetch_all), but a failed read is logged and
    /// becomes an empty list.
    pub async fn fetch_all_or_empty<T>(&self) -> Vec<T>
    where
        T: CollectionEntity,
    {
        match self.fetch_all::<T>().await {
            Ok(items) => items,
            Err(err) => {
                error!(collection = %T::COLLECTION, "Failed to load collection: {}", err);
                Vec::new()
            }
        }
    }

    pub async fn fetch_by_id<T>(&self, id: &str) -> Result<T, ContentClientError>
    where
        T: CollectionEntity,
    {
        let raw = self.client.get_by_id(T::COLLECTION, id).await?;
        serde_json::from_value(raw).map_err(|e| ContentClientError::Decode(e.to_string()))
    }
}

fn decode_items<T>(collection: Collection, items: Vec<Value>) -> Vec<T>
where
    T: CollectionEntity,
{
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match serde_json::from_value::<T>(raw) {
            Ok(item) => Some(item),
            Err(err) => {
                warn!(
                    collection = %collection,
                    index,
                    "Skipping record that failed to decode: {}",
                    err
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::modules::content::application::ports::outgoing::ItemsResult;
    use crate::modules::content::domain::{Project, Skill};

    /* --------------------------------------------------
     * Mock ContentClient
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockClient {
        all: Result<ItemsResult<Value>, ContentClientError>,
        single: Result<Value, ContentClientError>,
    }

    #[async_trait]
    impl ContentClient for MockClient {
        async fn get_all(
            &self,
            _collection: Collection,
        ) -> Result<ItemsResult<Value>, ContentClientError> {
            self.all.clone()
        }

        async fn get_by_id(
            &self,
            _collection: Collection,
            _id: &str,
        ) -> Result<Value, ContentClientError> {
            self.single.clone()
        }

        async fn ping(&self) -> Result<(), ContentClientError> {
            Ok(())
        }
    }

    fn client_with_items(items: Vec<Value>) -> MockClient {
        MockClient {
            all: Ok(ItemsResult::new(items)),
            single: Err(ContentClientError::NotFound),
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn fetch_all_decodes_in_store_order() {
        let query = ContentQuery::new(client_with_items(vec![
            json!({ "_id": "p2", "projectTitle": "Second" }),
            json!({ "_id": "p1", "projectTitle": "First" }),
        ]));

        let projects = query.fetch_all::<Project>().await.unwrap();

        let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }

    #[tokio::test]
    async fn undecodable_records_are_skipped() {
        let query = ContentQuery::new(client_with_items(vec![
            json!({ "_id": "s1", "skillName": "Rust" }),
            json!({ "skillName": "no id" }),
            json!("not an object"),
        ]));

        let skills = query.fetch_all::<Skill>().await.unwrap();

        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name.as_deref(), Some("Rust"));
    }

    #[tokio::test]
    async fn fetch_all_or_empty_swallows_errors() {
        let query = ContentQuery::new(MockClient {
            all: Err(ContentClientError::Network("connection refused".to_string())),
            single: Err(ContentClientError::NotFound),
        });

        let skills = query.fetch_all_or_empty::<Skill>().await;

        assert!(skills.is_empty());
    }

    #[tokio::test]
    async fn fetch_by_id_propagates_not_found() {
        let query = ContentQuery::new(client_with_items(vec![]));

        let result = query.fetch_by_id::<Project>("missing").await;

        assert_eq!(result.unwrap_err(), ContentClientError::NotFound);
    }

    #[tokio::test]
    async fn fetch_by_id_maps_bad_record_to_decode_error() {
        let query = ContentQuery::new(MockClient {
            all: Ok(ItemsResult::new(vec![])),
            single: Ok(json!({ "projectTitle": "no id" })),
        });

        let result = query.fetch_by_id::<Project>("p1").await;

        assert!(matches!(result, Err(ContentClientError::Decode(_))));
    }
}
