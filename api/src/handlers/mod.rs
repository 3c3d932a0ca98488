pub mod error_handler;

pub use error_handler::{extractor_error, handle_domain_error, validation_error_response};
