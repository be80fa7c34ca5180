//! Long URL parsing and host normalization.
//!
//! Long URLs are stored verbatim; only the host is normalized, for domain
//! accounting.

use url::Url;

/// Errors that can occur while extracting a host from a long URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("URL contains control characters")]
    ControlCharacter,
}

/// Parses `input` and returns its normalized host.
///
/// # Normalization Rules
///
/// 1. **Scheme**: any scheme is accepted, but the URL must be absolute
/// 2. **Hostname**: lowercase (the parser already lowercases special schemes)
/// 3. **`www.` prefix**: stripped once
/// 4. **Port**: not part of the host
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for unparseable input.
/// Returns [`UrlNormalizationError::MissingHost`] for hostless URLs such as
/// `mailto:` links or `file:///` paths.
/// Returns [`UrlNormalizationError::ControlCharacter`] if the raw input holds
/// tabs, newlines or other control characters. The parser silently drops
/// them, but the input is stored verbatim and must stay usable as a
/// `Location` header.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalized_host("https://www.Example.com:8080/a").unwrap(), "example.com");
/// assert!(normalized_host("not a url").is_err());
/// ```
pub fn normalized_host(input: &str) -> Result<String, UrlNormalizationError> {
    if input.chars().any(char::is_control) {
        return Err(UrlNormalizationError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(UrlNormalizationError::MissingHost)?
        .to_ascii_lowercase();

    let host = match host.strip_prefix("www.") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => host,
    };

    Ok(host)
}
