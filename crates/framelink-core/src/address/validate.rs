//! Read-only address validity probe.

use thiserror::Error;
use url::Url;

use super::with_default_scheme;

/// Why an address was rejected. Messages are the user-facing field errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("URL is required")]
    Required,
    #[error("Invalid URL format")]
    Malformed,
    #[error("URL must use HTTP or HTTPS protocol")]
    UnsupportedScheme,
}

/// Checks whether `raw` names an embeddable address. Applies the same
/// scheme-prefix rule as the sanitizer before parsing, but only as a probe:
/// nothing is mutated or stored here.
pub fn validate_address(raw: &str) -> Result<(), AddressError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AddressError::Required);
    }

    let probe = with_default_scheme(trimmed);
    let parsed = Url::parse(&probe).map_err(|_| AddressError::Malformed)?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(AddressError::UnsupportedScheme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_required() {
        assert_eq!(validate_address(""), Err(AddressError::Required));
        assert_eq!(validate_address("   "), Err(AddressError::Required));
    }

    #[test]
    fn bare_host_valid_after_implicit_scheme() {
        assert!(validate_address("example.com").is_ok());
        assert!(validate_address("example.com/path?q=1").is_ok());
    }

    #[test]
    fn explicit_http_and_https_valid() {
        assert!(validate_address("http://example.com").is_ok());
        assert!(validate_address("https://example.com").is_ok());
    }

    #[test]
    fn unsupported_scheme() {
        assert_eq!(
            validate_address("ftp://x.com"),
            Err(AddressError::UnsupportedScheme)
        );
        assert_eq!(
            validate_address("ws://example.com"),
            Err(AddressError::UnsupportedScheme)
        );
    }

    #[test]
    fn malformed() {
        assert_eq!(validate_address("https://"), Err(AddressError::Malformed));
        assert_eq!(
            validate_address("http://exa mple.com"),
            Err(AddressError::Malformed)
        );
    }
}
