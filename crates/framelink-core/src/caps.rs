//! Capability flag vocabulary.
//!
//! One static table describes all 14 flags: wire name, human label,
//! description, grouping, and accessors into `Capabilities`. The codec and
//! the CLI both iterate this table so the closed vocabulary lives in
//! exactly one place.

use crate::embed::Capabilities;

/// Presentation grouping for the flag listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagGroup {
    /// Frame-level permissions (fullscreen, payment, autoplay).
    General,
    /// Device/feature access granted via the allow attribute.
    DeviceAccess,
    /// Sandbox-relaxing permissions.
    Sandbox,
}

impl FlagGroup {
    pub fn title(self) -> &'static str {
        match self {
            FlagGroup::General => "General Permissions",
            FlagGroup::DeviceAccess => "Device Access",
            FlagGroup::Sandbox => "Sandbox Permissions",
        }
    }
}

/// Static description of one capability flag.
pub struct FlagSpec {
    /// ParameterSet name (e.g. `allowScripts`).
    pub param: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub group: FlagGroup,
    pub get: fn(&Capabilities) -> bool,
    pub set: fn(&mut Capabilities, bool),
}

macro_rules! flag {
    ($param:literal, $field:ident, $label:literal, $desc:literal, $group:expr) => {
        FlagSpec {
            param: $param,
            label: $label,
            description: $desc,
            group: $group,
            get: |caps| caps.$field,
            set: |caps, on| caps.$field = on,
        }
    };
}

/// The fixed 14-flag vocabulary, in wire order.
pub const FLAGS: &[FlagSpec] = &[
    flag!("allowFullscreen", fullscreen, "Allow Fullscreen", "Enable fullscreen API", FlagGroup::General),
    flag!("allowPaymentRequest", payment_request, "Allow Payment Request", "Enable payment request API", FlagGroup::General),
    flag!("allowAutoplay", autoplay, "Allow Autoplay", "Allow media autoplay", FlagGroup::General),
    flag!("allowCamera", camera, "Allow Camera", "Access to camera", FlagGroup::DeviceAccess),
    flag!("allowMicrophone", microphone, "Allow Microphone", "Access to microphone", FlagGroup::DeviceAccess),
    flag!("allowGeolocation", geolocation, "Allow Geolocation", "Access to location data", FlagGroup::DeviceAccess),
    flag!("allowClipboard", clipboard, "Allow Clipboard", "Access to clipboard", FlagGroup::DeviceAccess),
    flag!("allowPopups", popups, "Allow Popups", "Allow popup windows", FlagGroup::Sandbox),
    flag!("allowScripts", scripts, "Allow Scripts", "Enable JavaScript execution", FlagGroup::Sandbox),
    flag!("allowForms", forms, "Allow Forms", "Enable form submission", FlagGroup::Sandbox),
    flag!("allowModals", modals, "Allow Modals", "Allow modal dialogs", FlagGroup::Sandbox),
    flag!("allowPointerLock", pointer_lock, "Allow Pointer Lock", "Enable pointer lock API", FlagGroup::Sandbox),
    flag!("allowPresentation", presentation, "Allow Presentation", "Enable presentation API", FlagGroup::Sandbox),
    flag!("allowTopNavigation", top_navigation, "Allow Top Navigation", "Allow navigation of top-level context", FlagGroup::Sandbox),
];
