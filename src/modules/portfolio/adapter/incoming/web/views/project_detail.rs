use maud::{html, Markup};

use crate::modules::content::domain::Project;
use crate::modules::portfolio::adapter::incoming::web::views::components::tech_tags;

pub const NOT_FOUND_TITLE: &str = "Project Not Found";

fn back_link() -> Markup {
    html! {
        a.button.outline.back-link href="/projects" { "← Back to Projects" }
    }
}

pub fn project_detail_content(project: &Project) -> Markup {
    let title = project.title.as_deref().unwrap_or_default();
    let techs = project.tech_list();
    html! {
        article.project-detail {
            (back_link())
            h1.page-title.reveal { (title) }
            @if let Some(src) = project.image.as_deref().filter(|s| !s.trim().is_empty()) {
                img.detail-image src=(src) alt=(if title.is_empty() { "Project" } else { title });
            }
            div.detail-grid {
                @if let Some(role) = &project.role {
                    section.panel {
                        h2.small-caps { "My Role" }
                        p { (role) }
                    }
                }
                @if !techs.is_empty() {
                    section.panel {
                        h2.small-caps { "Technologies Used" }
                        (tech_tags(&techs))
                    }
                }
            }
            section.panel.overview {
                h2 { "Project Overview" }
                p.pre-line { (project.description.as_deref().unwrap_or_default()) }
            }
        }
    }
}

pub fn project_not_found_content() -> Markup {
    html! {
        section.not-found {
            h1.page-title { (NOT_FOUND_TITLE) }
            (back_link())
        }
    }
}
