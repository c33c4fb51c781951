use maud::{html, Markup};

use crate::modules::content::domain::Expertise;
use crate::modules::portfolio::adapter::incoming::web::views::components::{
    empty_state, external_link, page_header, proficiency_bar,
};
use crate::modules::portfolio::application::page_data::AboutPageData;

const FALLBACK_ICONS: [&str; 4] = ["◆", "⚡", "⛨", "⚿"];

pub fn about_content(data: &AboutPageData) -> Markup {
    html! {
        (page_header("About Me", ""))
        section.panel.background.reveal {
            h2 { "Professional Background" }
            p {
                "A backend developer focused on robust, scalable and high-performance "
                "server-side applications, from REST API design to database management."
            }
            p {
                "The work is rooted in clean architecture principles so that every "
                "solution stays maintainable, testable and ready to scale."
            }
            p {
                "Projects range from enterprise resource planning systems to asset "
                "management platforms, always balancing technical excellence with "
                "business objectives."
            }
        }
        section.expertise {
            h2 { "Areas of Expertise" }
            @if data.expertise.is_empty() {
                (empty_state("No expertise areas to show yet."))
            } @else {
                div.card-grid {
                    @for (index, item) in data.expertise.iter().enumerate() {
                        (expertise_card(index, item))
                    }
                }
            }
        }
    }
}

fn expertise_card(index: usize, item: &Expertise) -> Markup {
    let name = item.name.as_deref().unwrap_or_default();
    html! {
        article.card.expertise-card.reveal {
            div.card-icon {
                @match item.image.as_deref().filter(|s| !s.trim().is_empty()) {
                    Some(src) => { img src=(src) alt=(if name.is_empty() { "Expertise" } else { name }) width="32"; }
                    None => { span.rotating-icon aria-hidden="true" { (FALLBACK_ICONS[index % FALLBACK_ICONS.len()]) } }
                }
            }
            h3 { (name) }
            @if let Some(description) = &item.description {
                p { (description) }
            }
            (proficiency_bar(item.proficiency_level))
            @if let Some(url) = item.learn_more_url.as_deref().filter(|u| !u.trim().is_empty()) {
                (external_link(url, "learn-more", "Learn more →"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expertise_cards_render_in_given_order() {
        let data = AboutPageData {
            expertise: vec![
                Expertise {
                    id: "api".to_string(),
                    name: Some("API Design".to_string()),
                    proficiency_level: Some(90.0),
                    learn_more_url: Some("https://example.com/api".to_string()),
                    ..Default::default()
                },
                Expertise {
                    id: "sql".to_string(),
                    name: Some("SQL Tuning".to_string()),
                    ..Default::default()
                },
            ],
        };

        let html = about_content(&data).into_string();

        let api = html.find("API Design").unwrap();
        let sql = html.find("SQL Tuning").unwrap();
        assert!(api < sql);
        assert_eq!(html.matches("proficiency-fill").count(), 1);
        assert!(html.contains(r#"href="https://example.com/api" target="_blank""#));
        assert!(html.contains("rotating-icon"));
    }

    #[test]
    fn no_expertise_keeps_background_copy() {
        let html = about_content(&AboutPageData::default()).into_string();

        assert!(html.contains("Professional Background"));
        assert!(html.contains("empty-state"));
    }
}
