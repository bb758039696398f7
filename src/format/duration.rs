//! Clock-style duration strings (`hh:mm:ss`).

use thiserror::Error;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Errors raised when parsing an `hh:mm:ss` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    #[error("Invalid time format '{0}': expected \"hh:mm:ss\"")]
    WrongShape(String),
    #[error("Invalid time format '{0}': hours, minutes and seconds must be numeric")]
    NotNumeric(String),
    #[error("Invalid time format '{0}': minutes and seconds must be below 60 and no part may be negative")]
    OutOfRange(String),
}

/// Formats milliseconds as `hh:mm:ss`, dropping the sub-second part.
///
/// Hours are not wrapped at 24 and grow past two digits when needed.
///
/// # Example
/// ```
/// use stopclock::format::format_ms_to_hms;
///
/// assert_eq!(format_ms_to_hms(3_723_000), "01:02:03");
/// assert_eq!(format_ms_to_hms(999), "00:00:00");
/// ```
pub fn format_ms_to_hms(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parses an `hh:mm:ss` string into milliseconds.
///
/// Each field is read like a lenient integer parse: surrounding whitespace
/// and trailing garbage after the leading digits are ignored, so `"01:02:03s"`
/// is accepted.
pub fn parse_hms_to_ms(text: &str) -> Result<u64, DurationParseError> {
    let parts: Vec<&str> = text.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(DurationParseError::WrongShape(text.to_string()));
    };

    let not_numeric = || DurationParseError::NotNumeric(text.to_string());
    let hours = leading_integer(hours).ok_or_else(not_numeric)?;
    let minutes = leading_integer(minutes).ok_or_else(not_numeric)?;
    let seconds = leading_integer(seconds).ok_or_else(not_numeric)?;

    let out_of_range = || DurationParseError::OutOfRange(text.to_string());
    if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return Err(out_of_range());
    }

    (hours as u64)
        .checked_mul(MS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes as u64 * MS_PER_MINUTE))
        .and_then(|total| total.checked_add(seconds as u64 * MS_PER_SECOND))
        .ok_or_else(out_of_range)
}

/// Reads an optional sign and the digits that follow it, ignoring the rest.
fn leading_integer(field: &str) -> Option<i64> {
    let field = field.trim_start();
    let sign_len = usize::from(field.starts_with(['+', '-']));
    let digits_len = field[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    field[..sign_len + digits_len].parse().ok()
}
