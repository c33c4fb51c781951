use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::info;

use crate::modules::content::adapter::outgoing::{CmsHttpClient, InMemoryContentClient};
use crate::modules::content::application::ports::outgoing::ContentClient;
use crate::shared::config::{optional_var, parse_var, required_var, ConfigError, ConfigLookup};

/// Where page content comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    Remote(CmsConfig),
    Fixture(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmsConfig {
    pub base_url: Url,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl ContentSource {
    /// `CMS_FIXTURE_FILE` wins over `CMS_BASE_URL` so a local checkout can
    /// run without network access.
    pub fn from_lookup(lookup: &impl ConfigLookup) -> Result<Self, ConfigError> {
        if let Some(path) = optional_var(lookup, "CMS_FIXTURE_FILE") {
            return Ok(ContentSource::Fixture(PathBuf::from(path)));
        }

        let raw_url = required_var(lookup, "CMS_BASE_URL")?;
        let base_url = Url::parse(raw_url.trim_end_matches('/'))
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .ok_or_else(|| ConfigError::Invalid {
                key: "CMS_BASE_URL",
                value: raw_url.clone(),
            })?;

        let timeout_secs = parse_var(lookup, "CMS_TIMEOUT_SECS", 10u64)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "CMS_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(ContentSource::Remote(CmsConfig {
            base_url,
            api_key: optional_var(lookup, "CMS_API_KEY"),
            timeout: Duration::from_secs(timeout_secs),
        }))
    }

    /// Builds the client this source describes.
    pub fn connect(&self) -> Result<Arc<dyn ContentClient>, ConfigError> {
        match self {
            ContentSource::Remote(config) => {
                info!(base_url = %config.base_url, "Reading content from CMS");
                let client = CmsHttpClient::new(config).map_err(|e| ConfigError::Unreadable {
                    key: "CMS_BASE_URL",
                    reason: e.to_string(),
                })?;
                Ok(Arc::new(client))
            }
            ContentSource::Fixture(path) => {
                info!(path = %path.display(), "Reading content from fixture file");
                let client =
                    InMemoryContentClient::from_file(path).map_err(|e| ConfigError::Unreadable {
                        key: "CMS_FIXTURE_FILE",
                        reason: format!("{}: {}", path.display(), e),
                    })?;
                Ok(Arc::new(client))
            }
        }
    }
}
