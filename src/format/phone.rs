//! Korean phone number formatting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Seoul area code, which is two digits instead of three.
const SEOUL_PREFIX: &str = "02";

static SHORT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{4})([0-9]{4})").expect("Invalid short number pattern"));
static SEOUL_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{2})([0-9]{3,4})([0-9]{4})").expect("Invalid Seoul number pattern"));
static AREA_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{3})([0-9]{3,4})([0-9]{4})").expect("Invalid area number pattern"));

/// Inserts dashes into a bare phone number based on its length and prefix.
///
/// - 8 digits: `1588-1234`
/// - `02` followed by 7 or 8 digits: `02-123-4567`, `02-1234-5678`
/// - other 10 or 11 digit numbers: `031-123-4567`, `010-1234-5678`
///
/// Anything else is returned unchanged.
///
/// # Example
/// ```
/// use stopclock::format::phone_number_to_string;
///
/// assert_eq!(phone_number_to_string("01012345678"), "010-1234-5678");
/// assert_eq!(phone_number_to_string("0212345678"), "02-1234-5678");
/// assert_eq!(phone_number_to_string("12345678"), "1234-5678");
/// ```
pub fn phone_number_to_string(phone: &str) -> String {
    let length = phone.chars().count();
    let seoul = phone.starts_with(SEOUL_PREFIX);

    let formatted = match length {
        8 => SHORT_NUMBER.replace(phone, "$1-$2"),
        9 | 10 if seoul => SEOUL_NUMBER.replace(phone, "$1-$2-$3"),
        10 | 11 if !seoul => AREA_NUMBER.replace(phone, "$1-$2-$3"),
        _ => return phone.to_string(),
    };

    formatted.into_owned()
}
