use async_trait::async_trait;

use crate::modules::content::application::content_query::ContentQuery;
use crate::modules::content::application::ports::outgoing::ContentClient;
use crate::modules::content::domain::Project;
use crate::modules::portfolio::application::page_data::ProjectsPageData;
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadProjectsPageUseCase;

pub struct LoadProjectsPageService<C>
where
    C: ContentClient,
{
    query: ContentQuery<C>,
}

impl<C> LoadProjectsPageService<C>
where
    C: ContentClient,
{
    pub fn new(client: C) -> Self {
        Self {
            query: ContentQuery::new(client),
        }
    }
}

#[async_trait]
impl<C> LoadProjectsPageUseCase for LoadProjectsPageService<C>
where
    C: ContentClient + Send + Sync,
{
    /// Projects keep store insertion order.
    async fn execute(&self) -> ProjectsPageData {
        ProjectsPageData {
            projects: self.query.fetch_all_or_empty::<Project>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::modules::content::application::ports::outgoing::ContentClientError;
    use crate::modules::content::domain::Collection;
    use crate::tests::support::mock_content_client::MockContentClient;

    #[tokio::test]
    async fn projects_are_not_reordered() {
        let client = MockContentClient::new().with_items(
            Collection::Projects,
            vec![
                json!({ "_id": "z", "projectTitle": "Zeta" }),
                json!({ "_id": "a", "projectTitle": "Alpha" }),
                json!({ "_id": "m", "projectTitle": "Mu" }),
            ],
        );

        let page = LoadProjectsPageService::new(client).execute().await;

        let ids: Vec<_> = page.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[tokio::test]
    async fn fetch_failure_gives_empty_list() {
        let client = MockContentClient::new().with_failure(
            Collection::Projects,
            ContentClientError::UnexpectedStatus {
                status: 502,
                body: "bad gateway".to_string(),
            },
        );

        let page = LoadProjectsPageService::new(client).execute().await;

        assert!(page.projects.is_empty());
    }
}
