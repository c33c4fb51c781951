mod load_about_page;
mod load_certifications_page;
mod load_experience_page;
mod load_home_page;
mod load_project_detail;
mod load_projects_page;
mod load_skills_page;
mod load_social_links;

pub use load_about_page::LoadAboutPageUseCase;
pub use load_certifications_page::LoadCertificationsPageUseCase;
pub use load_experience_page::LoadExperiencePageUseCase;
pub use load_home_page::LoadHomePageUseCase;
pub use load_project_detail::{LoadProjectDetailUseCase, ProjectDetailError};
pub use load_projects_page::LoadProjectsPageUseCase;
pub use load_skills_page::LoadSkillsPageUseCase;
pub use load_social_links::LoadSocialLinksUseCase;
