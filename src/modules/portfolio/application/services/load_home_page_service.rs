use async_trait::async_trait;

use crate::modules::content::application::content_query::ContentQuery;
use crate::modules::content::application::ports::outgoing::ContentClient;
use crate::modules::content::domain::{Certification, Experience, Project, Skill, Statistic};
use crate::modules::portfolio::application::ordering::{
    sort_certifications, sort_experience, sort_skills, sort_statistics,
};
use crate::modules::portfolio::application::page_data::HomePageData;
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadHomePageUseCase;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct LoadHomePageService<C>
where
    C: ContentClient,
{
    query: ContentQuery<C>,
}

impl<C> LoadHomePageService<C>
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
impl<C> LoadHomePageUseCase for LoadHomePageService<C>
where
    C: ContentClient + Send + Sync,
{
    async fn execute(&self) -> HomePageData {
        // All five reads are in flight together; each one degrades to an
        // empty section on its own.
        let (mut stats, projects, mut skills, mut experience, mut certifications) = futures::join!(
            self.query.fetch_all_or_empty::<Statistic>(),
            self.query.fetch_all_or_empty::<Project>(),
            self.query.fetch_all_or_empty::<Skill>(),
            self.query.fetch_all_or_empty::<Experience>(),
            self.query.fetch_all_or_empty::<Certification>(),
        );

        sort_statistics(&mut stats);
        sort_skills(&mut skills);
        sort_experience(&mut experience);
        sort_certifications(&mut certifications);

        HomePageData {
            stats,
            projects,
            skills,
            experience,
            certifications,
        }
    }
}
