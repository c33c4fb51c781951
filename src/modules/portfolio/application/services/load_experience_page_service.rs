use async_trait::async_trait;

use crate::modules::content::application::content_query::ContentQuery;
use crate::modules::content::application::ports::outgoing::ContentClient;
use crate::modules::content::domain::Experience;
use crate::modules::portfolio::application::ordering::sort_experience;
use crate::modules::portfolio::application::page_data::ExperiencePageData;
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadExperiencePageUseCase;

pub struct LoadExperiencePageService<C>
where
    C: ContentClient,
{
    query: ContentQuery<C>,
}

impl<C> LoadExperiencePageService<C>
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
impl<C> LoadExperiencePageUseCase for LoadExperiencePageService<C>
where
    C: ContentClient + Send + Sync,
{
    async fn execute(&self) -> ExperiencePageData {
        let mut experiences = self.query.fetch_all_or_empty::<Experience>().await;
        sort_experience(&mut experiences);
        ExperiencePageData::new(experiences)
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
    async fn newest_role_first_and_current_roles_counted() {
        let client = MockContentClient::new().with_items(
            Collection::Experience,
            vec![
                json!({ "_id": "intern", "startDate": "2021-06-01", "endDate": "2021-12-31" }),
                json!({ "_id": "undated" }),
                json!({ "_id": "dev", "startDate": "2023-01-15", "isCurrent": true }),
            ],
        );

        let page = LoadExperiencePageService::new(client).execute().await;

        let ids: Vec<_> = page.experiences.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["dev", "intern", "undated"]);
        assert_eq!(page.current_count, 1);
    }

    #[tokio::test]
    async fn fetch_failure_gives_empty_timeline() {
        let client = MockContentClient::new().with_failure(
            Collection::Experience,
            ContentClientError::Decode("unexpected token".to_string()),
        );

        let page = LoadExperiencePageService::new(client).execute().await;

        assert!(page.experiences.is_empty());
        assert_eq!(page.current_count, 0);
    }
}
