pub mod cms_config;
pub mod cms_http_client;
pub mod in_memory_content_client;

pub use cms_config::{CmsConfig, ContentSource};
pub use cms_http_client::CmsHttpClient;
pub use in_memory_content_client::{FixtureError, InMemoryContentClient};
