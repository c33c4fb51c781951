use maud::{html, Markup};

use crate::modules::content::domain::{Certification, Experience, Project, Skill, Statistic};
use crate::modules::portfolio::adapter::incoming::web::views::components::{
    experience_range, image_or_placeholder, section_heading, tech_tags, year,
};
use crate::modules::portfolio::application::page_data::HomePageData;
use crate::shared::site_profile::SiteProfile;

pub fn home_content(site: &SiteProfile, data: &HomePageData) -> Markup {
    html! {
        (hero(site, &data.stats))
        (philosophy())
        @if !data.skills.is_empty() {
            (skills_grid(&data.skills))
        }
        @if !data.projects.is_empty() {
            (featured_projects(&data.projects))
        }
        @if !data.experience.is_empty() {
            (career_timeline(&data.experience))
        }
        @if !data.certifications.is_empty() {
            (certification_strip(&data.certifications))
        }
        (contact_callout(site))
    }
}

fn hero(site: &SiteProfile, stats: &[Statistic]) -> Markup {
    html! {
        section.hero {
            div.grid-background aria-hidden="true" {}
            div.hero-copy.reveal {
                span.availability { span.pulse {} "Available for Hire" }
                h1.hero-name { (site.owner_name) }
                p.hero-title { (site.owner_title) }
                p.hero-summary { (site.summary) }
                div.hero-actions {
                    a.button.primary href="/projects" { "View Projects" }
                    a.button.outline href="/contact" { "Get In Touch" }
                }
            }
            @if !stats.is_empty() {
                ul.hero-stats {
                    @for stat in stats {
                        li.stat-card.reveal {
                            div.stat-value {
                                (stat.value.as_deref().unwrap_or_default())
                                @if let Some(unit) = &stat.unit {
                                    span.accent { (unit) }
                                }
                            }
                            div.stat-label { (stat.label.as_deref().unwrap_or_default()) }
                            @if let Some(description) = &stat.description {
                                div.stat-description { (description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn philosophy() -> Markup {
    html! {
        section.home-section.philosophy {
            (section_heading("01", "Engineering", "Philosophy"))
            div.philosophy-grid {
                article.panel.reveal {
                    h3 { "Scalable Architecture" }
                    p {
                        "Designing systems that grow with the business, with modular "
                        "boundaries that keep them maintainable for the long run."
                    }
                }
                article.panel.reveal {
                    h3 { "Performance Optimization" }
                    p {
                        "Tuning queries, caching deliberately and keeping API response "
                        "times predictable under load."
                    }
                }
            }
        }
    }
}

fn skills_grid(skills: &[Skill]) -> Markup {
    html! {
        section.home-section.skills-grid-section {
            (section_heading("02", "Technical", "Arsenal"))
            ul.skill-tiles {
                @for skill in skills {
                    @let name = skill.name.as_deref().unwrap_or_default();
                    li.skill-tile.reveal {
                        (image_or_placeholder(skill.logo.as_deref(), name, "</>"))
                        h4 { (name) }
                        @if let Some(level) = skill.proficiency_level {
                            div.tile-bar style=(format!("width: {}%", level.clamp(0.0, 100.0))) {}
                        }
                    }
                }
            }
        }
    }
}

fn featured_projects(projects: &[Project]) -> Markup {
    html! {
        section.home-section.featured-projects {
            (section_heading("03", "Featured", "Deployments"))
            div.project-grid {
                @for project in projects {
                    @let title = project.title.as_deref().unwrap_or_default();
                    article.project-card.reveal {
                        a.card-link href=(format!("/projects/{}", project.id)) {
                            div.card-image {
                                (image_or_placeholder(project.image.as_deref(), title, "{ }"))
                            }
                            div.card-body {
                                h3 { (title) }
                                @if let Some(description) = &project.description {
                                    p.clamp { (description) }
                                }
                                (tech_tags(&project.tech_list()))
                                @if let Some(role) = &project.role {
                                    p.role { span.accent { "Role:" } " " (role) }
                                }
                            }
                        }
                    }
                }
            }
            div.section-footer {
                a.button.outline href="/projects" { "View All Projects" }
            }
        }
    }
}

fn career_timeline(experience: &[Experience]) -> Markup {
    html! {
        section.home-section.career {
            (section_heading("04", "Career", "Timeline"))
            p.section-intro {
                "A track record of delivering value and technical excellence across "
                "diverse organizations."
            }
            ol.timeline {
                @for role in experience {
                    li.timeline-item.reveal {
                        div.timeline-dot {}
                        div.timeline-card {
                            div.timeline-head {
                                div {
                                    h3 { (role.job_title.as_deref().unwrap_or_default()) }
                                    h4.accent { (role.company_name.as_deref().unwrap_or_default()) }
                                }
                                span.date-range { (experience_range(role, year)) }
                            }
                            @if let Some(text) = &role.responsibilities {
                                p.pre-line { (text) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn certification_strip(certifications: &[Certification]) -> Markup {
    html! {
        section.home-section.cert-strip {
            h3.centered { "Certifications & Awards" }
            ul.cert-chips {
                @for cert in certifications {
                    li.cert-chip.reveal {
                        (image_or_placeholder(cert.badge_image.as_deref(), "Badge", "★"))
                        div {
                            div.cert-name { (cert.name.as_deref().unwrap_or_default()) }
                            div.cert-issuer { (cert.issuer.as_deref().unwrap_or_default()) }
                        }
                    }
                }
            }
        }
    }
}

fn contact_callout(site: &SiteProfile) -> Markup {
    html! {
        section.home-section.contact-callout {
            (section_heading("05", "Let's Build", "Something Great"))
            p.section-intro {
                "Currently available for freelance projects and full-time opportunities."
            }
            a.contact-line href=(format!("mailto:{}", site.owner_email)) { (site.owner_email) }
            p.contact-line { (site.location) }
            a.button.primary href="/contact" { "Send a Message" }
        }
    }
}
