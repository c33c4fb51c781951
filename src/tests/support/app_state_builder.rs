use std::sync::Arc;

use actix_web::web;

use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadProjectDetailUseCase;
use crate::shared::site_profile::SiteProfile;
use crate::tests::support::mock_content_client::MockContentClient;
use crate::tests::support::stubs::StubSubmitContactMessageUseCase;
use crate::AppState;

pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
    submit_contact_message: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    site: SiteProfile,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: PortfolioUseCases::new(MockContentClient::new()),
            submit_contact_message: Arc::new(StubSubmitContactMessageUseCase::sent()),
            site: SiteProfile::default(),
        }
    }
}

impl TestAppStateBuilder {
    /// Wires every page use case to the same content client.
    pub fn with_content(mut self, client: MockContentClient) -> Self {
        self.portfolio = PortfolioUseCases::new(client);
        self
    }

    pub fn with_project_detail(
        mut self,
        uc: impl LoadProjectDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.project_detail = Arc::new(uc);
        self
    }

    pub fn with_submit_contact_message(
        mut self,
        uc: impl SubmitContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact_message = Arc::new(uc);
        self
    }

    pub fn with_site(mut self, site: SiteProfile) -> Self {
        self.site = site;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
            submit_contact_message_use_case: self.submit_contact_message,
            site: self.site,
        })
    }
}
