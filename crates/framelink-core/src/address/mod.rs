//! Embed address handling: sanitization into a canonical absolute form and
//! read-only validity probing.

mod sanitize;
mod validate;

pub use sanitize::{sanitize_address, ContextScheme};
pub use validate::{validate_address, AddressError};

/// Scheme-prefix rule shared by sanitizer and validator: bare host names
/// get `https://` so `example.com` parses as an absolute URL.
pub(crate) fn with_default_scheme(trimmed: &str) -> String {
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
