mod load_about_page_service;
mod load_certifications_page_service;
mod load_experience_page_service;
mod load_home_page_service;
mod load_project_detail_service;
mod load_projects_page_service;
mod load_skills_page_service;
mod load_social_links_service;

pub use load_about_page_service::LoadAboutPageService;
pub use load_certifications_page_service::LoadCertificationsPageService;
pub use load_experience_page_service::LoadExperiencePageService;
pub use load_home_page_service::LoadHomePageService;
pub use load_project_detail_service::LoadProjectDetailService;
pub use load_projects_page_service::LoadProjectsPageService;
pub use load_skills_page_service::LoadSkillsPageService;
pub use load_social_links_service::LoadSocialLinksService;
