//! Named starting points: common frame sizes and capability bundles.

use crate::embed::{Capabilities, Dimension, Unit};

/// A named width/height pair.
pub struct DimensionPreset {
    pub name: &'static str,
    pub width: Dimension,
    pub height: Dimension,
}

const fn px(magnitude: f64) -> Dimension {
    Dimension { magnitude, unit: Unit::Px }
}

const fn percent(magnitude: f64) -> Dimension {
    Dimension { magnitude, unit: Unit::Percent }
}

/// Device-class frame sizes.
pub const DIMENSION_PRESETS: &[DimensionPreset] = &[
    DimensionPreset { name: "Mobile", width: px(375.0), height: px(667.0) },
    DimensionPreset { name: "Tablet", width: px(768.0), height: px(1024.0) },
    DimensionPreset { name: "Desktop", width: px(1440.0), height: px(900.0) },
    DimensionPreset { name: "Full Width", width: percent(100.0), height: px(600.0) },
];

/// A named capability bundle.
pub struct CapabilityPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub capabilities: Capabilities,
}

/// Capability bundles, from most to least permissive.
pub const CAPABILITY_PRESETS: &[CapabilityPreset] = &[
    CapabilityPreset {
        name: "Permissive",
        description: "Maximum compatibility - allows most features",
        capabilities: Capabilities {
            fullscreen: true,
            autoplay: true,
            clipboard: true,
            popups: true,
            scripts: true,
            forms: true,
            modals: true,
            presentation: true,
            ..Capabilities::none()
        },
    },
    CapabilityPreset {
        name: "Secure",
        description: "Maximum security - everything locked down",
        capabilities: Capabilities::none(),
    },
    CapabilityPreset {
        name: "Media",
        description: "Optimized for video and media content",
        capabilities: Capabilities {
            fullscreen: true,
            autoplay: true,
            scripts: true,
            presentation: true,
            ..Capabilities::none()
        },
    },
    CapabilityPreset {
        name: "Interactive",
        description: "For forms and interactive applications",
        capabilities: Capabilities {
            clipboard: true,
            popups: true,
            scripts: true,
            forms: true,
            modals: true,
            ..Capabilities::none()
        },
    },
];

/// Case-insensitive lookup of a dimension preset.
pub fn find_dimension_preset(name: &str) -> Option<&'static DimensionPreset> {
    DIMENSION_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// Case-insensitive lookup of a capability preset.
pub fn find_capability_preset(name: &str) -> Option<&'static CapabilityPreset> {
    CAPABILITY_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}
