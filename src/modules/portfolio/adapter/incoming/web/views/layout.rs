// src/modules/portfolio/adapter/incoming/web/views/layout.rs
use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::modules::portfolio::application::page_data::FooterData;
use crate::modules::portfolio::adapter::incoming::web::views::components::social_link;
use crate::shared::site_profile::SiteProfile;

const STYLE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/style.css"));

pub const NAV_LINKS: [(&str, &str); 7] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Skills", "/skills"),
    ("Projects", "/projects"),
    ("Experience", "/experience"),
    ("Certifications", "/certifications"),
    ("Contact", "/contact"),
];

/// Everything around a page's own content: document head, header
/// navigation and footer.
#[derive(Debug, Clone, Copy)]
pub struct PageFrame<'a> {
    pub title: &'a str,
    pub current_path: &'a str,
    pub site: &'a SiteProfile,
    pub footer: &'a FooterData,
    pub refresh: Option<(u32, &'a str)>,
}

impl<'a> PageFrame<'a> {
    pub fn new(
        title: &'a str,
        current_path: &'a str,
        site: &'a SiteProfile,
        footer: &'a FooterData,
    ) -> Self {
        Self {
            title,
            current_path,
            site,
            footer,
            refresh: None,
        }
    }

    /// Ask the browser to load `target` after `seconds`.
    pub fn refresh_after(mut self, seconds: u32, target: &'a str) -> Self {
        self.refresh = Some((seconds, target));
        self
    }

    pub fn render(&self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    @if let Some((seconds, target)) = self.refresh {
                        meta http-equiv="refresh" content=(format!("{seconds};url={target}"));
                    }
                    title { (self.title) " | " (self.site.owner_name) }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    (site_header(self.site, self.current_path))
                    main.page {
                        (content)
                    }
                    (site_footer(self.site, self.footer))
                }
            }
        }
    }
}

fn site_header(site: &SiteProfile, current_path: &str) -> Markup {
    html! {
        header.site-header {
            nav.site-nav {
                a.brand href="/" {
                    span.brand-mark { (site.initials()) }
                    span.brand-name { (site.owner_name) }
                }
                input.nav-toggle type="checkbox" id="nav-toggle";
                label.nav-hamburger for="nav-toggle" aria-label="Toggle menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                ul.nav-links {
                    @for (name, path) in NAV_LINKS {
                        @let is_active = current_path == path;
                        li {
                            a href=(path)
                                class=[is_active.then_some("active")]
                                aria-current=[is_active.then_some("page")] { (name) }
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(site: &SiteProfile, footer: &FooterData) -> Markup {
    html! {
        footer.site-footer {
            div.footer-grid {
                div.footer-identity {
                    span.brand-mark.large { (site.initials()) }
                    div {
                        h3 { (site.owner_name) }
                        p.accent { (site.owner_title) }
                    }
                }
                div.footer-links {
                    p.tagline { (site.tagline) }
                    nav {
                        a href="/about" { "About" }
                        a href="/projects" { "Projects" }
                        a href="/contact" { "Contact" }
                    }
                }
                div.footer-social {
                    @for link in &footer.social_links {
                        (social_link(link))
                    }
                }
            }
            p.copyright {
                "© " (Utc::now().year()) " " (site.owner_name) ". All rights reserved."
            }
        }
    }
}
