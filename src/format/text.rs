//! Text Helpers
//!
//! Case conversion, truncation and random string generation.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

/// Suffix appended by [`truncate`].
pub const DEFAULT_ENDING: &str = "...";

const ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NUMERIC: &[u8] = b"0123456789";
const ALPHA_NUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Errors raised by the text helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("Invalid mode '{0}'. Mode must be \"alpha\", \"num\", or \"alphanum\".")]
    InvalidMode(String),
}

/// Characters drawn by [`random_string`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharacterSet {
    /// ASCII letters
    Alpha,
    /// ASCII digits
    Numeric,
    /// ASCII letters and digits
    #[default]
    AlphaNumeric,
}

impl CharacterSet {
    fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Alpha => ALPHA,
            Self::Numeric => NUMERIC,
            Self::AlphaNumeric => ALPHA_NUMERIC,
        }
    }
}

impl FromStr for CharacterSet {
    type Err = TextError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "alpha" => Ok(Self::Alpha),
            "num" => Ok(Self::Numeric),
            "alphanum" => Ok(Self::AlphaNumeric),
            other => Err(TextError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self {
            Self::Alpha => "alpha",
            Self::Numeric => "num",
            Self::AlphaNumeric => "alphanum",
        };
        f.write_str(mode)
    }
}

/// Converts `camelCase` to `snake_case`.
///
/// Every ASCII uppercase letter becomes `_` plus its lowercase form, so a
/// leading capital produces a leading underscore.
///
/// # Example
/// ```
/// use stopclock::format::camel_to_snake;
///
/// assert_eq!(camel_to_snake("userIdList"), "user_id_list");
/// ```
pub fn camel_to_snake(text: &str) -> String {
    let mut snake = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        if ch.is_ascii_uppercase() {
            snake.push('_');
            snake.push(ch.to_ascii_lowercase());
        } else {
            snake.push(ch);
        }
    }
    snake
}

/// Converts `snake_case` to `camelCase`.
///
/// An underscore followed by an ASCII word character is replaced by that
/// character in uppercase. Other underscores are kept.
///
/// # Example
/// ```
/// use stopclock::format::snake_to_camel;
///
/// assert_eq!(snake_to_camel("user_id_list"), "userIdList");
/// ```
pub fn snake_to_camel(text: &str) -> String {
    let mut camel = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match chars.peek() {
            Some(&next) if ch == '_' && is_word_char(next) => {
                camel.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => camel.push(ch),
        }
    }
    camel
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Truncates to `length` characters and appends `"..."` when cut.
pub fn truncate(text: &str, length: usize) -> String {
    truncate_with(text, length, DEFAULT_ENDING)
}

/// Truncates to `length` characters and appends `ending` when cut.
///
/// The ending is not counted towards `length`.
pub fn truncate_with(text: &str, length: usize, ending: &str) -> String {
    match text.char_indices().nth(length) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ending),
        None => text.to_string(),
    }
}

/// Generates `length` random characters from `charset`.
pub fn random_string(length: usize, charset: CharacterSet) -> String {
    let alphabet = charset.alphabet();
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("camelCase"), "camel_case");
        assert_eq!(camel_to_snake("already_snake"), "already_snake");
        assert_eq!(camel_to_snake("HTTPServer"), "_h_t_t_p_server");
        assert_eq!(camel_to_snake(""), "");
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("snake_case"), "snakeCase");
        assert_eq!(snake_to_camel("version_2_beta"), "version2Beta");
        assert_eq!(snake_to_camel("noUnderscore"), "noUnderscore");
    }

    #[test]
    fn test_snake_to_camel_edge_underscores() {
        assert_eq!(snake_to_camel("trailing_"), "trailing_");
        assert_eq!(snake_to_camel("_leading"), "Leading");
        assert_eq!(snake_to_camel("double__under"), "double_under");
        assert_eq!(snake_to_camel("space_ here"), "space_ here");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("Hello, world", 5), "Hello...");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("Hello", 5), "Hello");
        assert_eq!(truncate("Hi", 10), "Hi");
    }

    #[test]
    fn test_truncate_custom_ending() {
        assert_eq!(truncate_with("abcdef", 3, "…"), "abc…");
        assert_eq!(truncate_with("abcdef", 0, ""), "");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("안녕하세요", 2), "안녕...");
    }

    #[test]
    fn test_random_string_length_and_charset() {
        let numeric = random_string(32, CharacterSet::Numeric);
        assert_eq!(numeric.len(), 32);
        assert!(numeric.chars().all(|c| c.is_ascii_digit()));

        let alpha = random_string(32, CharacterSet::Alpha);
        assert!(alpha.chars().all(|c| c.is_ascii_alphabetic()));

        let mixed = random_string(64, CharacterSet::default());
        assert!(mixed.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_string_empty() {
        assert_eq!(random_string(0, CharacterSet::Alpha), "");
    }

    #[test]
    fn test_charset_parse() {
        assert_eq!("alpha".parse::<CharacterSet>(), Ok(CharacterSet::Alpha));
        assert_eq!("num".parse::<CharacterSet>(), Ok(CharacterSet::Numeric));
        assert_eq!("alphanum".parse::<CharacterSet>(), Ok(CharacterSet::AlphaNumeric));
        assert_eq!(
            "hex".parse::<CharacterSet>(),
            Err(TextError::InvalidMode("hex".to_string()))
        );
    }

    #[test]
    fn test_charset_display_round_trip() {
        for charset in [CharacterSet::Alpha, CharacterSet::Numeric, CharacterSet::AlphaNumeric] {
            assert_eq!(charset.to_string().parse::<CharacterSet>(), Ok(charset));
        }
    }
}
