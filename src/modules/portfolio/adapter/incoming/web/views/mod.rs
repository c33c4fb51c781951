pub mod about;
pub mod certifications;
pub mod components;
pub mod experience;
pub mod home;
pub mod layout;
pub mod project_detail;
pub mod projects;
pub mod skills;

pub use about::about_content;
pub use certifications::certifications_content;
pub use experience::experience_content;
pub use home::home_content;
pub use layout::PageFrame;
pub use project_detail::{project_detail_content, project_not_found_content, NOT_FOUND_TITLE};
pub use projects::projects_content;
pub use skills::skills_content;
