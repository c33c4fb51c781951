pub mod app_state_builder;
pub mod fixtures;
pub mod mock_content_client;
pub mod stubs;
