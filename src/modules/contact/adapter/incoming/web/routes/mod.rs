pub mod get_contact;
pub mod submit_contact;

pub use get_contact::contact_page_handler;
pub use submit_contact::submit_contact_handler;
