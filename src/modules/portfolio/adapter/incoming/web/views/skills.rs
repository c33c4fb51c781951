use maud::{html, Markup};

use crate::modules::content::domain::Skill;
use crate::modules::portfolio::adapter::incoming::web::views::components::{
    empty_state, page_header, proficiency_bar, years_label,
};
use crate::modules::portfolio::application::page_data::SkillsPageData;

pub fn skills_content(data: &SkillsPageData) -> Markup {
    html! {
        (page_header(
            "Technical Skills",
            "A comprehensive overview of the tools and technologies used to build robust backend solutions.",
        ))
        @if data.is_empty() {
            (empty_state("No skills to show yet."))
        } @else {
            @for group in &data.groups {
                section.skill-group.reveal {
                    h2 { (group.category) }
                    div.card-grid {
                        @for skill in &group.skills {
                            (skill_card(skill))
                        }
                    }
                }
            }
            div.summary-band {
                div { strong { (data.skill_count()) } span { "Technical Skills" } }
                div { strong { (data.groups.len()) } span { "Skill Categories" } }
                div { strong { (data.average_proficiency()) "%" } span { "Average Proficiency" } }
            }
        }
    }
}

fn skill_card(skill: &Skill) -> Markup {
    let name = skill.name.as_deref().unwrap_or_default();
    html! {
        article.card.skill-card {
            div.skill-head {
                @if let Some(logo) = skill.logo.as_deref().filter(|s| !s.trim().is_empty()) {
                    img.skill-logo src=(logo) alt=(if name.is_empty() { "Skill" } else { name }) width="48";
                }
                div {
                    h3 { (name) }
                    @if let Some(years) = skill.years_of_experience {
                        p.years { (years_label(years)) " experience" }
                    }
                }
            }
            @if let Some(description) = &skill.description {
                p { (description) }
            }
            (proficiency_bar(skill.proficiency_level))
        }
    }
}
