use maud::{html, Markup};

use crate::modules::content::domain::Experience;
use crate::modules::portfolio::adapter::incoming::web::views::components::{
    empty_state, experience_range, page_header, plural, short_month_year,
};
use crate::modules::portfolio::application::page_data::ExperiencePageData;

pub fn experience_content(data: &ExperiencePageData) -> Markup {
    html! {
        (page_header(
            "Work Experience",
            "A professional journey in backend development: roles, responsibilities and contributions.",
        ))
        @if data.experiences.is_empty() {
            (empty_state("No roles to show yet."))
        } @else {
            ol.timeline {
                @for role in &data.experiences {
                    (timeline_entry(role))
                }
            }
            div.summary-band {
                div {
                    strong { (data.experiences.len()) }
                    span { "Professional Roles" }
                }
                div {
                    strong { (data.current_count) }
                    span { (plural(data.current_count, "Current Position", "Current Positions")) }
                }
            }
        }
    }
}

fn timeline_entry(role: &Experience) -> Markup {
    let lines = role.responsibility_lines();
    html! {
        li.timeline-item.reveal {
            div.timeline-dot {}
            div.timeline-card {
                @if role.is_current() {
                    span.badge.current { "Current Position" }
                }
                h2 { (role.job_title.as_deref().unwrap_or_default()) }
                h3.accent { (role.company_name.as_deref().unwrap_or_default()) }
                p.date-range { (experience_range(role, short_month_year)) }
                @if !lines.is_empty() {
                    h4.small-caps { "Key Responsibilities" }
                    ul.responsibilities {
                        @for line in &lines {
                            li { (line) }
                        }
                    }
                }
            }
        }
    }
}
