//! ParameterSet codec: the flat, URL-safe form of an `EmbedConfig`.
//!
//! Encoding rules: empty scalars are omitted (absence, not `""`, is the
//! encoded form of "unset"); true flags encode as the literal `"true"` and
//! false flags are omitted; custom attributes travel as one JSON-array
//! parameter. Decoding is total: every input yields a defined result, with
//! absent/garbage values falling back to defaults rather than erroring.
//!
//! Round-trip law: `decode(&encode(&c)) == Some(c)` whenever the address is
//! non-empty, and encode∘decode is idempotent past the first application.

use url::form_urlencoded;

use crate::caps;
use crate::embed::{Capabilities, CustomAttribute, Dimension, EmbedConfig, Unit};

/// Reserved parameter whose absence signals "no stored configuration".
pub const URL_PARAM: &str = "url";

/// Reserved parameter holding the JSON-encoded custom attribute array.
pub const CUSTOM_ATTRS_PARAM: &str = "customAttrs";

/// Ordered `name=value` pairs, the wire-side representation. Order follows
/// encode order; decode treats it as a lookup table (first match wins).
pub type ParameterSet = Vec<(String, String)>;

fn push(params: &mut ParameterSet, name: &str, value: impl Into<String>) {
    params.push((name.to_string(), value.into()));
}

fn get<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

/// Serializes a configuration to its flat parameter form.
pub fn encode(config: &EmbedConfig) -> ParameterSet {
    let mut params = ParameterSet::new();

    if !config.address.is_empty() {
        push(&mut params, URL_PARAM, config.address.clone());
    }
    push(&mut params, "width", config.width.magnitude.to_string());
    push(&mut params, "height", config.height.magnitude.to_string());
    push(&mut params, "widthUnit", config.width.unit.as_param());
    push(&mut params, "heightUnit", config.height.unit.as_param());
    if !config.title.is_empty() {
        push(&mut params, "title", config.title.clone());
    }
    if !config.frame_name.is_empty() {
        push(&mut params, "name", config.frame_name.clone());
    }

    for spec in caps::FLAGS {
        if (spec.get)(&config.capabilities) {
            push(&mut params, spec.param, "true");
        }
    }

    if !config.custom_attributes.is_empty() {
        match serde_json::to_string(&config.custom_attributes) {
            Ok(json) => push(&mut params, CUSTOM_ATTRS_PARAM, json),
            Err(err) => tracing::warn!(%err, "failed to encode custom attributes; omitting"),
        }
    }

    params
}

/// Restores a configuration from its flat parameter form.
///
/// Returns `None` when the `url` parameter is absent: there is no stored
/// configuration, which is a defined outcome and not an error. Everything
/// else defaults rather than fails: width/height fall back to 800/600,
/// units to px, flags to false unless the value is exactly `"true"`, and a
/// structurally invalid `customAttrs` degrades to an empty list with a
/// warning instead of aborting the rest of the decode.
pub fn decode(params: &[(String, String)]) -> Option<EmbedConfig> {
    // Address was sanitized before it was encoded; trusted verbatim here.
    let address = get(params, URL_PARAM)?.to_string();

    let magnitude = |name: &str, fallback: f64| {
        get(params, name)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|m| m.is_finite())
            .unwrap_or(fallback)
    };
    let unit = |name: &str| {
        get(params, name)
            .and_then(Unit::from_param)
            .unwrap_or_default()
    };

    let mut capabilities = Capabilities::none();
    for spec in caps::FLAGS {
        (spec.set)(&mut capabilities, get(params, spec.param) == Some("true"));
    }

    let custom_attributes = match get(params, CUSTOM_ATTRS_PARAM) {
        None => Vec::new(),
        Some(json) => match serde_json::from_str::<Vec<CustomAttribute>>(json) {
            Ok(attrs) => attrs,
            Err(err) => {
                tracing::warn!(%err, "malformed customAttrs parameter; ignoring");
                Vec::new()
            }
        },
    };

    Some(EmbedConfig {
        address,
        width: Dimension {
            magnitude: magnitude("width", 800.0),
            unit: unit("widthUnit"),
        },
        height: Dimension {
            magnitude: magnitude("height", 600.0),
            unit: unit("heightUnit"),
        },
        capabilities,
        custom_attributes,
        title: get(params, "title").unwrap_or_default().to_string(),
        frame_name: get(params, "name").unwrap_or_default().to_string(),
    })
}

/// Percent-encodes a ParameterSet into query-string form.
pub fn to_query_string(params: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(n, v)| (n.as_str(), v.as_str())))
        .finish()
}

/// Parses a query string (with or without a leading `?`) into pairs.
pub fn from_query_string(query: &str) -> ParameterSet {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::CustomAttribute;

    fn sample_config() -> EmbedConfig {
        let mut config = EmbedConfig::default();
        config.address = "https://example.com/widget".to_string();
        config.width = Dimension::percent(75.0);
        config.height = Dimension::px(480.0);
        config.title = "Example widget".to_string();
        config.frame_name = "widget-frame".to_string();
        config.capabilities.camera = true;
        config.capabilities.geolocation = true;
        config.custom_attributes = vec![
            CustomAttribute::new("loading", "lazy"),
            CustomAttribute::new("referrerpolicy", "no-referrer"),
        ];
        config
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let config = sample_config();
        assert_eq!(decode(&encode(&config)), Some(config));
    }

    #[test]
    fn round_trip_survives_query_string_form() {
        let config = sample_config();
        let query = to_query_string(&encode(&config));
        assert_eq!(decode(&from_query_string(&query)), Some(config));
    }

    #[test]
    fn encode_decode_is_idempotent() {
        let config = sample_config();
        let first = encode(&config);
        let second = encode(&decode(&first).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_set_decodes_to_none() {
        assert_eq!(decode(&[]), None);
    }

    #[test]
    fn url_only_yields_defaults_with_all_flags_off() {
        let params = vec![(URL_PARAM.to_string(), "https://a.com".to_string())];
        let config = decode(&params).unwrap();
        assert_eq!(config.address, "https://a.com");
        assert_eq!(config.width, Dimension::px(800.0));
        assert_eq!(config.height, Dimension::px(600.0));
        assert_eq!(config.capabilities, Capabilities::none());
        assert!(config.custom_attributes.is_empty());
        assert_eq!(config.title, "");
        assert_eq!(config.frame_name, "");
    }

    #[test]
    fn empty_scalars_are_omitted_not_empty() {
        let mut config = EmbedConfig::default();
        config.address = "https://a.com".to_string();
        let params = encode(&config);
        assert!(get(&params, "title").is_none());
        assert!(get(&params, "name").is_none());
        assert!(get(&params, CUSTOM_ATTRS_PARAM).is_none());
    }

    #[test]
    fn false_flags_are_absent_true_flags_literal() {
        let mut config = EmbedConfig::default();
        config.address = "https://a.com".to_string();
        config.capabilities = Capabilities::none();
        config.capabilities.scripts = true;
        let params = encode(&config);
        assert_eq!(get(&params, "allowScripts"), Some("true"));
        assert!(get(&params, "allowCamera").is_none());
        assert!(get(&params, "allowFullscreen").is_none());
    }

    #[test]
    fn stray_flag_values_decode_as_false() {
        let params = vec![
            (URL_PARAM.to_string(), "https://a.com".to_string()),
            ("allowScripts".to_string(), "yes".to_string()),
            ("allowCamera".to_string(), "TRUE".to_string()),
            ("allowForms".to_string(), "true".to_string()),
        ];
        let config = decode(&params).unwrap();
        assert!(!config.capabilities.scripts);
        assert!(!config.capabilities.camera);
        assert!(config.capabilities.forms);
    }

    #[test]
    fn unrecognized_units_default_to_px() {
        let params = vec![
            (URL_PARAM.to_string(), "https://a.com".to_string()),
            ("width".to_string(), "50".to_string()),
            ("widthUnit".to_string(), "em".to_string()),
        ];
        let config = decode(&params).unwrap();
        assert_eq!(config.width, Dimension::px(50.0));
    }

    #[test]
    fn unparseable_magnitudes_fall_back_to_defaults() {
        let params = vec![
            (URL_PARAM.to_string(), "https://a.com".to_string()),
            ("width".to_string(), "wide".to_string()),
            ("height".to_string(), "NaN".to_string()),
        ];
        let config = decode(&params).unwrap();
        assert_eq!(config.width.magnitude, 800.0);
        assert_eq!(config.height.magnitude, 600.0);
    }

    #[test]
    fn malformed_custom_attrs_degrades_without_aborting() {
        let params = vec![
            (URL_PARAM.to_string(), "https://a.com".to_string()),
            ("title".to_string(), "still here".to_string()),
            (CUSTOM_ATTRS_PARAM.to_string(), "{not json[".to_string()),
        ];
        let config = decode(&params).unwrap();
        assert!(config.custom_attributes.is_empty());
        assert_eq!(config.title, "still here");
    }

    #[test]
    fn custom_attrs_tolerate_legacy_id_field() {
        // Older encoders shipped the synthetic id; it is ignored on decode.
        let params = vec![
            (URL_PARAM.to_string(), "https://a.com".to_string()),
            (
                CUSTOM_ATTRS_PARAM.to_string(),
                r#"[{"id":"abc","name":"loading","value":"lazy"}]"#.to_string(),
            ),
        ];
        let config = decode(&params).unwrap();
        assert_eq!(
            config.custom_attributes,
            vec![CustomAttribute::new("loading", "lazy")]
        );
    }

    #[test]
    fn query_string_percent_encodes_reserved_characters() {
        let params = vec![
            (URL_PARAM.to_string(), "https://a.com/?x=1&y=2".to_string()),
            ("title".to_string(), "a & b".to_string()),
        ];
        let query = to_query_string(&params);
        assert!(!query.contains("?x"));
        assert_eq!(from_query_string(&query), params);
    }
}
