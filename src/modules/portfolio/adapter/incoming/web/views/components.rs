// src/modules/portfolio/adapter/incoming/web/views/components.rs
//
// Small markup pieces and display formatting shared by the page views.

use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::modules::content::domain::{Experience, SocialIcon, SocialLink};

//
// ──────────────────────────────────────────────────────────
// Formatting
// ──────────────────────────────────────────────────────────
//

pub const PRESENT: &str = "Present";

/// `Jun 2023`
pub fn short_month_year(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

/// `June 2023`
pub fn long_month_year(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

pub fn year(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y").to_string()).unwrap_or_default()
}

/// `Jan 2023 - Present`, `Jun 2021 - Dec 2021`.
pub fn experience_range(exp: &Experience, fmt: fn(Option<DateTime<Utc>>) -> String) -> String {
    let end = if exp.is_current() {
        PRESENT.to_string()
    } else {
        fmt(exp.end_date)
    };
    format!("{} - {}", fmt(exp.start_date), end)
}

/// Whole numbers print without a fraction.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

pub fn years_label(years: f64) -> String {
    let unit = if years == 1.0 { "year" } else { "years" };
    format!("{}+ {unit}", number(years))
}

pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

fn clamp_percent(level: f64) -> f64 {
    level.clamp(0.0, 100.0)
}

//
// ──────────────────────────────────────────────────────────
// Markup
// ──────────────────────────────────────────────────────────
//

pub fn page_header(title: &str, intro: &str) -> Markup {
    html! {
        header.page-header.reveal {
            h1.page-title { (title) }
            @if !intro.is_empty() {
                p.page-intro { (intro) }
            }
        }
    }
}

/// Numbered section heading used on the home page.
pub fn section_heading(index: &str, lead: &str, accent: &str) -> Markup {
    html! {
        div.section-heading {
            span.section-index { (index) }
            h2 { (lead) " " span.accent { (accent) } }
        }
    }
}

pub fn image_or_placeholder(src: Option<&str>, alt: &str, placeholder: &str) -> Markup {
    html! {
        @match src.filter(|s| !s.trim().is_empty()) {
            Some(src) => { img src=(src) alt=(alt) loading="lazy"; }
            None => { div.placeholder aria-hidden="true" { (placeholder) } }
        }
    }
}

/// Rendered only for a positive level.
pub fn proficiency_bar(level: Option<f64>) -> Markup {
    html! {
        @if let Some(level) = level.filter(|l| *l > 0.0) {
            @let percent = clamp_percent(level);
            div.proficiency {
                div.proficiency-label {
                    span { "Proficiency" }
                    span.proficiency-value { (number(percent)) "%" }
                }
                div.proficiency-track {
                    div.proficiency-fill style=(format!("width: {}%", number(percent))) {}
                }
            }
        }
    }
}

pub fn tech_tags(techs: &[String]) -> Markup {
    html! {
        @if !techs.is_empty() {
            ul.tech-tags {
                @for tech in techs {
                    li.tech-tag { (tech) }
                }
            }
        }
    }
}

pub fn empty_state(message: &str) -> Markup {
    html! {
        p.empty-state { (message) }
    }
}

/// External link that opens in a new browsing context.
pub fn external_link(href: &str, class: &str, text: &str) -> Markup {
    html! {
        a class=(class) href=(href) target="_blank" rel="noopener noreferrer" { (text) }
    }
}

pub fn social_icon(kind: SocialIcon) -> Markup {
    let (class, glyph) = match kind {
        SocialIcon::GitHub => ("icon icon-github", "GH"),
        SocialIcon::LinkedIn => ("icon icon-linkedin", "in"),
        SocialIcon::Mail => ("icon icon-mail", "@"),
        SocialIcon::Resume => ("icon icon-resume", "CV"),
    };
    html! {
        span class=(class) aria-hidden="true" { (glyph) }
    }
}

/// A footer/contact social button. Links without a URL render inert.
pub fn social_link(link: &SocialLink) -> Markup {
    let label = link.platform_name.as_deref().unwrap_or("Social");
    let title = link.description.as_deref().unwrap_or(label);
    let icon = html! {
        @match link.icon.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(src) => { img.social-icon src=(src) alt=(label) width="20"; }
            None => { (social_icon(link.icon_kind())) }
        }
    };

    html! {
        @match link.url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(url) if link.opens_in_new_context() => {
                a.social-link href=(url) title=(title) aria-label=(label)
                    target="_blank" rel="noopener noreferrer" { (icon) }
            }
            Some(url) => {
                a.social-link href=(url) title=(title) aria-label=(label) { (icon) }
            }
            None => {
                span.social-link title=(title) aria-label=(label) { (icon) }
            }
        }
    }
}
