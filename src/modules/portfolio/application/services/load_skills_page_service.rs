use async_trait::async_trait;

use crate::modules::content::application::content_query::ContentQuery;
use crate::modules::content::application::ports::outgoing::ContentClient;
use crate::modules::content::domain::Skill;
use crate::modules::portfolio::application::ordering::{group_skills_by_category, sort_skills};
use crate::modules::portfolio::application::page_data::SkillsPageData;
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadSkillsPageUseCase;

pub struct LoadSkillsPageService<C>
where
    C: ContentClient,
{
    query: ContentQuery<C>,
}

impl<C> LoadSkillsPageService<C>
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
impl<C> LoadSkillsPageUseCase for LoadSkillsPageService<C>
where
    C: ContentClient + Send + Sync,
{
    async fn execute(&self) -> SkillsPageData {
        let mut skills = self.query.fetch_all_or_empty::<Skill>().await;
        sort_skills(&mut skills);

        SkillsPageData {
            groups: group_skills_by_category(skills),
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
    async fn groups_follow_sorted_first_seen_order() {
        let client = MockContentClient::new().with_items(
            Collection::Skills,
            vec![
                json!({ "_id": "sql", "skillName": "SQL", "category": "Database", "proficiencyLevel": 80 }),
                json!({ "_id": "go", "skillName": "Go", "proficiencyLevel": 90 }),
                json!({ "_id": "pg", "skillName": "PostgreSQL", "category": "Database", "proficiencyLevel": 85 }),
            ],
        );
        let service = LoadSkillsPageService::new(client);

        let page = service.execute().await;

        let categories: Vec<_> = page.groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["Other", "Database"]);

        let database: Vec<_> = page.groups[1].skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(database, vec!["pg", "sql"]);
    }

    #[tokio::test]
    async fn fetch_failure_renders_no_groups() {
        let client = MockContentClient::new().with_failure(
            Collection::Skills,
            ContentClientError::Network("dns".to_string()),
        );
        let service = LoadSkillsPageService::new(client);

        let page = service.execute().await;

        assert!(page.is_empty());
    }
}
