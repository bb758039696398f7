//! Parsing Module
//!
//! - [`query`]: URL query parameters
//! - [`email`]: email address validation

pub mod email;
pub mod query;

pub use email::is_valid_email;
pub use query::{parse_url_params, QueryError};
