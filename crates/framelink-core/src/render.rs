//! Embedding text generator: the human-readable `<iframe>` snippet.

use crate::embed::{Dimension, EmbedConfig};
use crate::tokens::derive_tokens;

/// Formats a dimension for the embed text: bare number for px (the HTML
/// attribute form), `NN%` for percent. Trailing `.0` is not printed.
pub fn format_dimension(dim: &Dimension) -> String {
    format!("{}{}", dim.magnitude, dim.unit.render_suffix())
}

/// Renders the final embed text, one attribute per line.
///
/// src/width/height always appear. title/name appear only when non-empty,
/// `allowfullscreen` only when the flag is set. `sandbox` appears only
/// when its token list is non-empty: omitting the attribute is the
/// platform's own spelling of maximum restriction. `allow` tokens are
/// joined with `; `. Custom attributes follow in sequence order, skipping
/// entries with an empty name or value; values are quoted as-is, so names
/// and values must not contain quote characters.
pub fn render_embed(config: &EmbedConfig) -> String {
    let tokens = derive_tokens(&config.capabilities);

    let mut attrs = vec![
        format!("src=\"{}\"", config.address),
        format!("width=\"{}\"", format_dimension(&config.width)),
        format!("height=\"{}\"", format_dimension(&config.height)),
    ];

    if !config.title.is_empty() {
        attrs.push(format!("title=\"{}\"", config.title));
    }
    if !config.frame_name.is_empty() {
        attrs.push(format!("name=\"{}\"", config.frame_name));
    }
    if config.capabilities.fullscreen {
        attrs.push("allowfullscreen".to_string());
    }
    if !tokens.sandbox.is_empty() {
        attrs.push(format!("sandbox=\"{}\"", tokens.sandbox.join(" ")));
    }
    if !tokens.allow.is_empty() {
        attrs.push(format!("allow=\"{}\"", tokens.allow.join("; ")));
    }

    for attr in &config.custom_attributes {
        if !attr.name.is_empty() && !attr.value.is_empty() {
            attrs.push(format!("{}=\"{}\"", attr.name, attr.value));
        }
    }

    format!("<iframe\n  {}\n></iframe>", attrs.join("\n  "))
}
