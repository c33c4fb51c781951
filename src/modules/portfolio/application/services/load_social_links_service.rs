use async_trait::async_trait;

use crate::modules::content::application::content_query::ContentQuery;
use crate::modules::content::application::ports::outgoing::ContentClient;
use crate::modules::content::domain::SocialLink;
use crate::modules::portfolio::application::ordering::sort_social_links;
use crate::modules::portfolio::application::page_data::FooterData;
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadSocialLinksUseCase;

pub struct LoadSocialLinksService<C>
where
    C: ContentClient,
{
    query: ContentQuery<C>,
}

impl<C> LoadSocialLinksService<C>
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
impl<C> LoadSocialLinksUseCase for LoadSocialLinksService<C>
where
    C: ContentClient + Send + Sync,
{
    async fn execute(&self) -> FooterData {
        let mut social_links = self.query.fetch_all_or_empty::<SocialLink>().await;
        sort_social_links(&mut social_links);
        FooterData { social_links }
    }
}
