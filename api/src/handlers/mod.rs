pub mod error;

pub use error::{form_error_handler, handle_domain_error, json_error_handler, not_found};
