//! Best-effort canonicalization of user-entered addresses.

use serde::{Deserialize, Serialize};

use super::with_default_scheme;

/// Scheme of the context the embed will be served from. Outside a browser
/// there is no ambient "current document" to ask, so this is an explicit
/// policy input, normally read from `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextScheme {
    Http,
    #[default]
    Https,
}

/// Normalizes arbitrary user text into an absolute, protocol-qualified
/// address. Never fails; the result is best-effort and still goes through
/// `validate_address` separately.
///
/// - No `://` separator: prefix `https://`
/// - `http://` while the embedding context is `https`: rewrite to
///   `https://` (mixed-content frames fail to load) and log a warning
/// - Anything else: returned trimmed, unchanged
pub fn sanitize_address(raw: &str, context: ContextScheme) -> String {
    let trimmed = raw.trim();

    if !trimmed.contains("://") {
        return with_default_scheme(trimmed);
    }

    if let Some(rest) = trimmed.strip_prefix("http://") {
        if context == ContextScheme::Https {
            tracing::warn!(address = trimmed, "rewriting http:// to https:// to avoid mixed content");
            return format!("https://{rest}");
        }
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(
            sanitize_address("example.com", ContextScheme::Https),
            "https://example.com"
        );
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(
            sanitize_address("  example.com/page  ", ContextScheme::Https),
            "https://example.com/page"
        );
        assert_eq!(
            sanitize_address("  https://example.com  ", ContextScheme::Https),
            "https://example.com"
        );
    }

    #[test]
    fn http_rewritten_under_secure_context() {
        assert_eq!(
            sanitize_address("http://example.com", ContextScheme::Https),
            "https://example.com"
        );
    }

    #[test]
    fn http_kept_under_insecure_context() {
        assert_eq!(
            sanitize_address("http://example.com", ContextScheme::Http),
            "http://example.com"
        );
    }

    #[test]
    fn https_and_other_schemes_untouched() {
        assert_eq!(
            sanitize_address("https://example.com", ContextScheme::Https),
            "https://example.com"
        );
        assert_eq!(
            sanitize_address("ftp://example.com", ContextScheme::Https),
            "ftp://example.com"
        );
    }
}
