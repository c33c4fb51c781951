// src/shared/site_profile.rs
use crate::shared::config::{var_or, ConfigLookup};

/// Who the site is about. Rendered in the header, hero, footer and contact
/// page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteProfile {
    pub owner_name: String,
    pub owner_title: String,
    pub owner_email: String,
    pub location: String,
    pub tagline: String,
    pub summary: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            owner_name: "Portfolio Owner".to_string(),
            owner_title: "Backend Developer".to_string(),
            owner_email: "hello@example.com".to_string(),
            location: "Remote".to_string(),
            tagline: "Building scalable backend solutions".to_string(),
            summary: "Architecting robust, scalable backend systems and the REST APIs \
                      that power modern applications."
                .to_string(),
        }
    }
}

impl SiteProfile {
    pub fn from_lookup(lookup: &impl ConfigLookup) -> Self {
        let defaults = Self::default();
        Self {
            owner_name: var_or(lookup, "SITE_OWNER_NAME", &defaults.owner_name),
            owner_title: var_or(lookup, "SITE_OWNER_TITLE", &defaults.owner_title),
            owner_email: var_or(lookup, "SITE_OWNER_EMAIL", &defaults.owner_email),
            location: var_or(lookup, "SITE_OWNER_LOCATION", &defaults.location),
            tagline: var_or(lookup, "SITE_TAGLINE", &defaults.tagline),
            summary: var_or(lookup, "SITE_OWNER_SUMMARY", &defaults.summary),
        }
    }

    /// First letter of the first two words, upper-cased.
    pub fn initials(&self) -> String {
        self.owner_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn from_lookup_overrides_only_what_is_set() {
        let env = hashmap! {
            "SITE_OWNER_NAME" => "Ada Lovelace",
            "SITE_OWNER_LOCATION" => "  ",
        };
        let lookup = move |key: &str| env.get(key).map(|v| v.to_string());

        let profile = SiteProfile::from_lookup(&lookup);

        assert_eq!(profile.owner_name, "Ada Lovelace");
        assert_eq!(profile.location, SiteProfile::default().location);
        assert_eq!(profile.owner_title, "Backend Developer");
    }

    #[test]
    fn initials_take_two_words() {
        let profile = |name: &str| SiteProfile {
            owner_name: name.to_string(),
            ..Default::default()
        };

        assert_eq!(profile("ada lovelace").initials(), "AL");
        assert_eq!(profile("Grace Brewster Hopper").initials(), "GB");
        assert_eq!(profile("Cher").initials(), "C");
        assert_eq!(profile("").initials(), "");
    }
}
