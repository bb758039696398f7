//! Formatting Module
//!
//! Converts values to and from human-readable strings.
//!
//! # Structure
//!
//! - [`duration`]: `hh:mm:ss` strings
//! - [`phone`]: dashed phone numbers
//! - [`number`]: thousands separators
//! - [`text`]: case conversion, truncation, random strings

pub mod duration;
pub mod number;
pub mod phone;
pub mod text;

pub use duration::{format_ms_to_hms, parse_hms_to_ms, DurationParseError};
pub use number::{float_with_commas, number_with_commas, remove_commas};
pub use phone::phone_number_to_string;
pub use text::{
    camel_to_snake,
    random_string,
    snake_to_camel,
    truncate,
    truncate_with,
    CharacterSet,
    TextError
};
