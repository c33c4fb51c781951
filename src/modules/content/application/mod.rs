pub mod content_query;
pub mod ports;
