use async_trait::async_trait;
use tracing::error;

use crate::modules::content::application::content_query::ContentQuery;
use crate::modules::content::application::ports::outgoing::ContentClient;
use crate::modules::content::domain::Project;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    LoadProjectDetailUseCase, ProjectDetailError,
};

pub struct LoadProjectDetailService<C>
where
    C: ContentClient,
{
    query: ContentQuery<C>,
}

impl<C> LoadProjectDetailService<C>
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
impl<C> LoadProjectDetailUseCase for LoadProjectDetailService<C>
where
    C: ContentClient + Send + Sync,
{
    async fn execute(&self, project_id: &str) -> Result<Project, ProjectDetailError> {
        let project_id = project_id.trim();
        if project_id.is_empty() {
            return Err(ProjectDetailError::MissingId);
        }

        self.query
            .fetch_by_id::<Project>(project_id)
            .await
            .map_err(|err| {
                error!(project_id, "Error loading project: {}", err);
                ProjectDetailError::from(err)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::modules::content::application::ports::outgoing::ContentClientError;
    use crate::modules::content::domain::Collection;
    use crate::tests::support::mock_content_client::MockContentClient;

    fn client() -> MockContentClient {
        MockContentClient::new().with_items(
            Collection::Projects,
            vec![json!({
                "_id": "erp",
                "projectTitle": "ERP Platform",
                "technologiesUsed": "C#, .NET"
            })],
        )
    }

    #[tokio::test]
    async fn execute_success() {
        let project = LoadProjectDetailService::new(client())
            .execute("erp")
            .await
            .unwrap();

        assert_eq!(project.title.as_deref(), Some("ERP Platform"));
        assert_eq!(project.tech_list(), vec!["C#", ".NET"]);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let result = LoadProjectDetailService::new(client()).execute("nope").await;
        assert_eq!(result, Err(ProjectDetailError::NotFound));
    }

    #[tokio::test]
    async fn blank_id_short_circuits_without_fetching() {
        let client = client();
        let service = LoadProjectDetailService::new(client.clone());

        let result = service.execute("  ").await;

        assert_eq!(result, Err(ProjectDetailError::MissingId));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_unavailable() {
        let client = MockContentClient::new().with_failure(
            Collection::Projects,
            ContentClientError::Network("timed out".to_string()),
        );

        let result = LoadProjectDetailService::new(client).execute("erp").await;

        assert!(matches!(result, Err(ProjectDetailError::Unavailable(_))));
    }
}
