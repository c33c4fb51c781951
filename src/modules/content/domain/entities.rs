// src/modules/content/domain/entities.rs
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::cms_fields::{optional_bool, optional_date, optional_number, optional_text};
use super::collection::Collection;

//
// ──────────────────────────────────────────────────────────
// Collection binding
// ──────────────────────────────────────────────────────────
//

/// A record type that lives in exactly one named collection.
pub trait CollectionEntity: DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: Collection;
}

macro_rules! collection_entity {
    ($ty:ty, $collection:expr) => {
        impl CollectionEntity for $ty {
            const COLLECTION: Collection = $collection;
        }
    };
}

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "optional_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "optional_date")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "certificationName", default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(rename = "issuingOrganization", default, deserialize_with = "optional_text")]
    pub issuer: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub badge_image: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub date_issued: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_text")]
    pub verification_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "optional_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "optional_date")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_date")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_bool")]
    pub is_current: Option<bool>,
    /// Free text, one responsibility per line.
    #[serde(default, deserialize_with = "optional_text")]
    pub responsibilities: Option<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.is_current.unwrap_or(false)
    }

    /// Responsibility lines as bullets. Lines already starting with `•` or
    /// `-` are kept as written.
    pub fn responsibility_lines(&self) -> Vec<String> {
        self.responsibilities
            .as_deref()
            .unwrap_or_default()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let trimmed = line.trim();
                if trimmed.starts_with('•') || trimmed.starts_with('-') {
                    trimmed.to_string()
                } else {
                    format!("• {trimmed}")
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expertise {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "optional_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "optional_date")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "areaOfExpertise", default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(rename = "shortDescription", default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub image: Option<String>,
    /// 0–100
    #[serde(default, deserialize_with = "optional_number")]
    pub proficiency_level: Option<f64>,
    #[serde(default, deserialize_with = "optional_text")]
    pub learn_more_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "optional_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "optional_date")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "projectTitle", default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(rename = "projectDescription", default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(rename = "rolePerformed", default, deserialize_with = "optional_text")]
    pub role: Option<String>,
    /// Comma separated, e.g. `"C#, .NET, SQL Server"`.
    #[serde(rename = "technologiesUsed", default, deserialize_with = "optional_text")]
    pub technologies: Option<String>,
    #[serde(rename = "projectImage", default, deserialize_with = "optional_text")]
    pub image: Option<String>,
}

impl Project {
    pub fn tech_list(&self) -> Vec<String> {
        self.technologies
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tech| !tech.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "optional_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "optional_date")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "skillName", default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    pub proficiency_level: Option<f64>,
    #[serde(default, deserialize_with = "optional_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(rename = "skillLogo", default, deserialize_with = "optional_text")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    pub years_of_experience: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Mail,
    Resume,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "optional_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "optional_date")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_text")]
    pub platform_name: Option<String>,
    #[serde(rename = "platformUrl", default, deserialize_with = "optional_text")]
    pub url: Option<String>,
    #[serde(rename = "platformIcon", default, deserialize_with = "optional_text")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    pub display_order: Option<f64>,
}

impl SocialLink {
    pub fn icon_kind(&self) -> SocialIcon {
        let name = self
            .platform_name
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();

        if name.contains("github") {
            SocialIcon::GitHub
        } else if name.contains("linkedin") {
            SocialIcon::LinkedIn
        } else if name.contains("gmail") || name.contains("email") {
            SocialIcon::Mail
        } else if name.contains("resume") {
            SocialIcon::Resume
        } else {
            SocialIcon::Mail
        }
    }

    /// Email links stay in the current browsing context; everything else
    /// opens a new one.
    pub fn opens_in_new_context(&self) -> bool {
        let is_email_platform = self
            .platform_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains("email"));
        let is_mailto = self
            .url
            .as_deref()
            .is_some_and(|url| url.starts_with("mailto:"));

        !(is_email_platform || is_mailto)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "optional_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "optional_date")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "statisticLabel", default, deserialize_with = "optional_text")]
    pub label: Option<String>,
    /// Text on purpose: values like `"50+"` are allowed.
    #[serde(rename = "statisticValue", default, deserialize_with = "optional_text")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    pub display_order: Option<f64>,
}

impl Statistic {
    pub fn display_value(&self) -> String {
        let value = self.value.as_deref().unwrap_or_default();
        match self.unit.as_deref().map(str::trim) {
            Some(unit) if !unit.is_empty() => format!("{value}{unit}"),
            _ => value.to_string(),
        }
    }
}

collection_entity!(Certification, Collection::Certifications);
collection_entity!(Experience, Collection::Experience);
collection_entity!(Expertise, Collection::Expertise);
collection_entity!(Project, Collection::Projects);
collection_entity!(Skill, Collection::Skills);
collection_entity!(SocialLink, Collection::SocialLinks);
collection_entity!(Statistic, Collection::Stats);
