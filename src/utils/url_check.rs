//! Checks applied to long URLs before they are stored.
//!
//! The URL is kept verbatim as the canonical key, so nothing is normalized
//! here; inputs that cannot be served back as a `Location` header are
//! rejected instead.

use url::Url;

/// Reasons a long URL is refused.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlCheckError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must not contain control characters")]
    ControlCharacter,
}

/// Accepts absolute `http`/`https` URLs with a host and no control
/// characters.
///
/// Rejects `javascript:`, `data:`, `file:` and other schemes.
///
/// # Errors
///
/// Returns [`UrlCheckError::ControlCharacter`] if any character is a control
/// character (tabs and newlines included).
/// Returns [`UrlCheckError::InvalidFormat`] for unparsable or host-less URLs.
/// Returns [`UrlCheckError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn check_long_url(input: &str) -> Result<(), UrlCheckError> {
    if input.chars().any(char::is_control) {
        return Err(UrlCheckError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlCheckError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlCheckError::InvalidFormat("missing host".to_string()));
    }

    Ok(())
}
