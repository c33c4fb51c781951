use std::sync::Arc;

use crate::modules::content::application::ports::outgoing::ContentClient;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    LoadAboutPageUseCase, LoadCertificationsPageUseCase, LoadExperiencePageUseCase,
    LoadHomePageUseCase, LoadProjectDetailUseCase, LoadProjectsPageUseCase, LoadSkillsPageUseCase,
    LoadSocialLinksUseCase,
};
use crate::modules::portfolio::application::services::{
    LoadAboutPageService, LoadCertificationsPageService, LoadExperiencePageService,
    LoadHomePageService, LoadProjectDetailService, LoadProjectsPageService, LoadSkillsPageService,
    LoadSocialLinksService,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub home: Arc<dyn LoadHomePageUseCase + Send + Sync>,
    pub about: Arc<dyn LoadAboutPageUseCase + Send + Sync>,
    pub skills: Arc<dyn LoadSkillsPageUseCase + Send + Sync>,
    pub projects: Arc<dyn LoadProjectsPageUseCase + Send + Sync>,
    pub project_detail: Arc<dyn LoadProjectDetailUseCase + Send + Sync>,
    pub experience: Arc<dyn LoadExperiencePageUseCase + Send + Sync>,
    pub certifications: Arc<dyn LoadCertificationsPageUseCase + Send + Sync>,
    pub social_links: Arc<dyn LoadSocialLinksUseCase + Send + Sync>,
}

impl PortfolioUseCases {
    /// Every page controller reads through the same client.
    pub fn new<C>(client: C) -> Self
    where
        C: ContentClient + Clone + 'static,
    {
        Self {
            home: Arc::new(LoadHomePageService::new(client.clone())),
            about: Arc::new(LoadAboutPageService::new(client.clone())),
            skills: Arc::new(LoadSkillsPageService::new(client.clone())),
            projects: Arc::new(LoadProjectsPageService::new(client.clone())),
            project_detail: Arc::new(LoadProjectDetailService::new(client.clone())),
            experience: Arc::new(LoadExperiencePageService::new(client.clone())),
            certifications: Arc::new(LoadCertificationsPageService::new(client.clone())),
            social_links: Arc::new(LoadSocialLinksService::new(client)),
        }
    }
}
