pub mod contact_page;

pub use contact_page::{contact_content, ContactPageState, SUCCESS_RESET_SECS};
