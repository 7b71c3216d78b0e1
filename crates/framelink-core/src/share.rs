//! Shareable links: a base URL plus the encoded ParameterSet.

use url::Url;

use crate::embed::EmbedConfig;
use crate::params;

/// Builds the shareable link for a configuration: `{base}?{query}`.
pub fn build_share_link(base: &str, config: &EmbedConfig) -> String {
    let query = params::to_query_string(&params::encode(config));
    format!("{}?{}", base.trim_end_matches('?'), query)
}

/// Extracts the query portion from whatever the user pasted: a full link,
/// a `?query`, or a bare query string.
pub fn query_of_link(input: &str) -> String {
    let trimmed = input.trim();
    if let Ok(parsed) = Url::parse(trimmed) {
        return parsed.query().unwrap_or_default().to_string();
    }
    trimmed.strip_prefix('?').unwrap_or(trimmed).to_string()
}

/// Restores a configuration from a share link (or bare query string).
/// `None` means the link carries no stored configuration.
pub fn decode_share_link(input: &str) -> Option<EmbedConfig> {
    params::decode(&params::from_query_string(&query_of_link(input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::Dimension;

    #[test]
    fn link_shape() {
        let mut config = EmbedConfig::default();
        config.address = "https://example.com".to_string();
        let link = build_share_link("https://framelink.dev/embed", &config);
        assert!(link.starts_with("https://framelink.dev/embed?url="));
    }

    #[test]
    fn query_extraction_variants() {
        assert_eq!(
            query_of_link("https://framelink.dev/embed?url=https%3A%2F%2Fa.com"),
            "url=https%3A%2F%2Fa.com"
        );
        assert_eq!(query_of_link("?url=x"), "url=x");
        assert_eq!(query_of_link("url=x"), "url=x");
    }

    #[test]
    fn share_link_round_trip() {
        let mut config = EmbedConfig::default();
        config.address = "https://example.com/widget?id=7".to_string();
        config.width = Dimension::percent(100.0);
        config.title = "Widget".to_string();
        let link = build_share_link("https://framelink.dev/embed", &config);
        assert_eq!(decode_share_link(&link), Some(config));
    }

    #[test]
    fn link_without_configuration() {
        assert_eq!(decode_share_link("https://framelink.dev/embed"), None);
        assert_eq!(decode_share_link(""), None);
    }
}
