use std::fmt;
use std::str::FromStr;

/// Named collections exposed by the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Certifications,
    Experience,
    Expertise,
    Projects,
    Skills,
    SocialLinks,
    Stats,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Certifications,
        Collection::Experience,
        Collection::Expertise,
        Collection::Projects,
        Collection::Skills,
        Collection::SocialLinks,
        Collection::Stats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Certifications => "certifications",
            Collection::Experience => "experience",
            Collection::Expertise => "expertise",
            Collection::Projects => "projects",
            Collection::Skills => "skills",
            Collection::SocialLinks => "sociallinks",
            Collection::Stats => "stats",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown collection: {0}")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for collection in Collection::ALL {
            assert_eq!(collection.as_str().parse::<Collection>(), Ok(collection));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "blog_posts".parse::<Collection>().unwrap_err();
        assert_eq!(err, UnknownCollection("blog_posts".to_string()));
    }

    #[test]
    fn social_links_use_store_name() {
        assert_eq!(Collection::SocialLinks.to_string(), "sociallinks");
    }
}
