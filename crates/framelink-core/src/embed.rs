//! Embed configuration data model.
//!
//! `EmbedConfig` is the aggregate the rest of the crate operates on: an
//! address, two dimensions, the closed set of capability flags, and an
//! ordered list of custom attributes. Values are plain data; validation is
//! a separate side channel (see `validate`) and never blocks construction.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Dimension unit for width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Px,
    Percent,
}

impl Unit {
    /// Wire name used in the ParameterSet (`widthUnit`/`heightUnit` values).
    pub fn as_param(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
        }
    }

    /// Parse a wire name back into a unit. Unrecognized values yield `None`;
    /// the codec maps that to the `Px` default.
    pub fn from_param(s: &str) -> Option<Unit> {
        match s {
            "px" => Some(Unit::Px),
            "%" => Some(Unit::Percent),
            _ => None,
        }
    }

    /// Suffix appended when rendering the embed text. Pixel widths render as
    /// bare numbers (the HTML attribute form), percent as `NN%`.
    pub fn render_suffix(self) -> &'static str {
        match self {
            Unit::Px => "",
            Unit::Percent => "%",
        }
    }
}

/// A magnitude plus unit. Validated bounds: magnitude > 0, percent <= 100,
/// px <= 5000 (see `validate::validate_dimension`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Dimension {
    pub fn px(magnitude: f64) -> Self {
        Self { magnitude, unit: Unit::Px }
    }

    pub fn percent(magnitude: f64) -> Self {
        Self { magnitude, unit: Unit::Percent }
    }
}

/// The closed set of 14 capability flags. Field names are part of the
/// contract; the wire vocabulary lives in `caps::FLAGS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub fullscreen: bool,
    pub payment_request: bool,
    pub autoplay: bool,
    pub camera: bool,
    pub microphone: bool,
    pub geolocation: bool,
    pub clipboard: bool,
    pub popups: bool,
    pub scripts: bool,
    pub forms: bool,
    pub modals: bool,
    pub pointer_lock: bool,
    pub presentation: bool,
    pub top_navigation: bool,
}

impl Capabilities {
    /// Every flag off. This is the decode baseline (absent = false) and the
    /// starting point for presets and explicit CLI flag sets.
    pub const fn none() -> Self {
        Self {
            fullscreen: false,
            payment_request: false,
            autoplay: false,
            camera: false,
            microphone: false,
            geolocation: false,
            clipboard: false,
            popups: false,
            scripts: false,
            forms: false,
            modals: false,
            pointer_lock: false,
            presentation: false,
            top_navigation: false,
        }
    }
}

impl Default for Capabilities {
    /// Creation defaults for a fresh configuration: a usable but contained
    /// frame (fullscreen, popups, scripts, forms, modals).
    fn default() -> Self {
        Self {
            fullscreen: true,
            popups: true,
            scripts: true,
            forms: true,
            modals: true,
            ..Self::none()
        }
    }
}

static NEXT_ATTR_ID: AtomicU64 = AtomicU64::new(1);

fn next_attr_id() -> u64 {
    NEXT_ATTR_ID.fetch_add(1, Ordering::Relaxed)
}

/// A free-form name/value attribute appended to the embed text.
///
/// `id` is a process-local counter used only for list identity (e.g. a UI
/// keying rows); it is never serialized and does not participate in
/// equality, so the codec round-trip law holds under `==`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomAttribute {
    #[serde(skip_serializing, skip_deserializing, default = "next_attr_id")]
    pub id: u64,
    pub name: String,
    pub value: String,
}

impl CustomAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: next_attr_id(),
            name: name.into(),
            value: value.into(),
        }
    }
}

impl PartialEq for CustomAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for CustomAttribute {}

/// The full embed configuration.
///
/// `address` is either empty ("unset") or a sanitizer output (absolute,
/// protocol-qualified; see `address::sanitize_address`). `title` and
/// `frame_name` use empty-means-unset to match the wire format, where
/// absence rather than an empty string encodes "unset".
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedConfig {
    pub address: String,
    pub width: Dimension,
    pub height: Dimension,
    pub capabilities: Capabilities,
    pub custom_attributes: Vec<CustomAttribute>,
    pub title: String,
    pub frame_name: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            width: Dimension::px(800.0),
            height: Dimension::px(600.0),
            capabilities: Capabilities::default(),
            custom_attributes: Vec::new(),
            title: String::new(),
            frame_name: String::new(),
        }
    }
}
