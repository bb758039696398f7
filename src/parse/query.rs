//! URL query string parsing.

use std::collections::BTreeMap;

use log::debug;
use thiserror::Error;
use url::Url;

/// Errors raised when reading query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Decodes the query parameters of an absolute URL.
///
/// Percent-escapes and `+` are decoded. When a key repeats, the last
/// value wins.
///
/// # Example
/// ```
/// use stopclock::parse::parse_url_params;
///
/// let params = parse_url_params("https://example.com/search?q=rust+lang&page=2").unwrap();
/// assert_eq!(params["q"], "rust lang");
/// assert_eq!(params["page"], "2");
/// ```
pub fn parse_url_params(url: &str) -> Result<BTreeMap<String, String>, QueryError> {
    let parsed = Url::parse(url).map_err(|source| QueryError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let params: BTreeMap<String, String> = parsed.query_pairs().into_owned().collect();
    debug!("Parsed {} query parameters from {}", params.len(), url);
    Ok(params)
}
