pub mod about;
pub mod certifications;
pub mod experience;
pub mod fallback;
pub mod home;
pub mod project_detail;
pub mod projects;
pub mod skills;

pub use about::about_page_handler;
pub use certifications::certifications_page_handler;
pub use experience::experience_page_handler;
pub use fallback::redirect_home;
pub use home::home_page_handler;
pub use project_detail::project_detail_page_handler;
pub use projects::projects_page_handler;
pub use skills::skills_page_handler;
