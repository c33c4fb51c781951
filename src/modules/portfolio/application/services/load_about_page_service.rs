use async_trait::async_trait;

use crate::modules::content::application::content_query::ContentQuery;
use crate::modules::content::application::ports::outgoing::ContentClient;
use crate::modules::content::domain::Expertise;
use crate::modules::portfolio::application::ordering::sort_expertise;
use crate::modules::portfolio::application::page_data::AboutPageData;
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadAboutPageUseCase;

pub struct LoadAboutPageService<C>
where
    C: ContentClient,
{
    query: ContentQuery<C>,
}

impl<C> LoadAboutPageService<C>
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
impl<C> LoadAboutPageUseCase for LoadAboutPageService<C>
where
    C: ContentClient + Send + Sync,
{
    async fn execute(&self) -> AboutPageData {
        let mut expertise = self.query.fetch_all_or_empty::<Expertise>().await;
        sort_expertise(&mut expertise);
        AboutPageData { expertise }
    }
}
