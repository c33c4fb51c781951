use maud::{html, Markup};

use crate::modules::content::domain::Project;
use crate::modules::portfolio::adapter::incoming::web::views::components::{
    empty_state, image_or_placeholder, page_header, tech_tags,
};
use crate::modules::portfolio::application::page_data::ProjectsPageData;

pub fn projects_content(data: &ProjectsPageData) -> Markup {
    html! {
        (page_header(
            "Projects",
            "A showcase of professional work in backend development, system architecture and scalable delivery.",
        ))
        @if data.projects.is_empty() {
            (empty_state("No projects to show yet."))
        } @else {
            div.project-list {
                @for project in &data.projects {
                    (project_card(project))
                }
            }
            div.summary-band {
                div {
                    strong { (data.projects.len()) "+" }
                    span { "Successfully Delivered Projects" }
                }
            }
        }
    }
}

fn project_card(project: &Project) -> Markup {
    let title = project.title.as_deref().unwrap_or_default();
    let techs = project.tech_list();
    html! {
        article.card.project-row.reveal {
            div.card-image {
                (image_or_placeholder(
                    project.image.as_deref(),
                    if title.is_empty() { "Project" } else { title },
                    "{ }",
                ))
            }
            div.card-body {
                h2 { (title) }
                @if let Some(role) = &project.role {
                    span.badge { (role) }
                }
                @if let Some(description) = &project.description {
                    p { (description) }
                }
                @if !techs.is_empty() {
                    h3.small-caps { "Technologies Used" }
                    (tech_tags(&techs))
                }
                a.button.outline href=(format!("/projects/{}", project.id)) { "View Details" }
            }
        }
    }
}
