use async_trait::async_trait;

use crate::modules::content::application::content_query::ContentQuery;
use crate::modules::content::application::ports::outgoing::ContentClient;
use crate::modules::content::domain::Certification;
use crate::modules::portfolio::application::ordering::sort_certifications;
use crate::modules::portfolio::application::page_data::CertificationsPageData;
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadCertificationsPageUseCase;

pub struct LoadCertificationsPageService<C>
where
    C: ContentClient,
{
    query: ContentQuery<C>,
}

impl<C> LoadCertificationsPageService<C>
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
impl<C> LoadCertificationsPageUseCase for LoadCertificationsPageService<C>
where
    C: ContentClient + Send + Sync,
{
    async fn execute(&self) -> CertificationsPageData {
        let mut certifications = self.query.fetch_all_or_empty::<Certification>().await;
        sort_certifications(&mut certifications);
        CertificationsPageData { certifications }
    }
}
