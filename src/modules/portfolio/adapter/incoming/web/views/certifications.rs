use maud::{html, Markup};

use crate::modules::content::domain::Certification;
use crate::modules::portfolio::adapter::incoming::web::views::components::{
    empty_state, external_link, long_month_year, page_header, plural,
};
use crate::modules::portfolio::application::page_data::CertificationsPageData;

pub fn certifications_content(data: &CertificationsPageData) -> Markup {
    html! {
        (page_header(
            "Certifications",
            "Professional certifications and credentials that back a commitment to continuous learning.",
        ))
        @if data.certifications.is_empty() {
            (empty_state("No certifications to show yet."))
        } @else {
            div.card-grid {
                @for cert in &data.certifications {
                    (certification_card(cert))
                }
            }
            @for cert in &data.certifications {
                (certification_dialog(cert))
            }
            div.summary-band {
                div {
                    strong { (data.certifications.len()) }
                    span {
                        (plural(
                            data.certifications.len(),
                            "Professional Certification",
                            "Professional Certifications",
                        ))
                    }
                }
            }
        }
    }
}

fn dialog_id(cert: &Certification) -> String {
    format!("cert-{}", cert.id)
}

fn display_name(cert: &Certification) -> &str {
    cert.name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or("Certification")
}

fn certification_card(cert: &Certification) -> Markup {
    html! {
        article.card.cert-card.reveal {
            a.card-link href=(format!("#{}", dialog_id(cert))) {
                @if let Some(src) = cert.badge_image.as_deref().filter(|s| !s.trim().is_empty()) {
                    img.badge-image src=(src) alt=(display_name(cert)) loading="lazy";
                }
                h2 { (cert.name.as_deref().unwrap_or_default()) }
                @if let Some(issuer) = &cert.issuer {
                    p.accent { (issuer) }
                }
                @if cert.date_issued.is_some() {
                    p.issued { "Issued " (long_month_year(cert.date_issued)) }
                }
            }
            @if let Some(url) = cert.verification_url.as_deref().filter(|u| !u.trim().is_empty()) {
                (external_link(url, "verify-link", "Verify Credential"))
            }
        }
    }
}

/// Opened by linking to its fragment; closing links back to `#`.
fn certification_dialog(cert: &Certification) -> Markup {
    html! {
        div.modal id=(dialog_id(cert)) role="dialog" aria-modal="true" {
            a.modal-backdrop href="#" aria-label="Close modal" {}
            div.modal-body {
                a.modal-close href="#" aria-label="Close modal" { "×" }
                @if let Some(src) = cert.badge_image.as_deref().filter(|s| !s.trim().is_empty()) {
                    img.modal-badge src=(src) alt=(display_name(cert)) width="400";
                }
                h2 { (cert.name.as_deref().unwrap_or_default()) }
                @if let Some(issuer) = &cert.issuer {
                    p.accent { (issuer) }
                }
                @if cert.date_issued.is_some() {
                    p.issued { (long_month_year(cert.date_issued)) }
                }
                @if let Some(url) = cert.verification_url.as_deref().filter(|u| !u.trim().is_empty()) {
                    (external_link(url, "button primary", "View Credential"))
                }
            }
        }
    }
}
