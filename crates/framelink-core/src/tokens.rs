//! Capability-token derivation: projects the boolean flag set onto the two
//! attribute grammars.
//!
//! The sandbox grammar is restrictive: an empty list means maximum
//! restriction, which `render` expresses by omitting the attribute rather
//! than emitting `sandbox=""`. The allow grammar is additive: empty means
//! nothing granted. Fullscreen belongs to neither; it is its own attribute.

use crate::embed::Capabilities;

/// Token restoring the embedded content's own origin. Only meaningful next
/// to at least one other sandbox token; emitting it alone would be a
/// self-contradictory grammar, so `derive_tokens` never does.
pub const SAME_ORIGIN_TOKEN: &str = "allow-same-origin";

/// The two derived token lists. Order is fixed for reproducible text
/// output; semantically both are unordered sets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedTokens {
    /// Restrictive grammar (sandbox attribute). Empty = maximum restriction.
    pub sandbox: Vec<&'static str>,
    /// Additive grammar (allow attribute). Empty = nothing granted.
    pub allow: Vec<&'static str>,
}

/// Pure projection from flags to token lists; same input, same output,
/// same order.
pub fn derive_tokens(caps: &Capabilities) -> DerivedTokens {
    let mut sandbox = Vec::new();
    if caps.scripts {
        sandbox.push("allow-scripts");
    }
    if caps.forms {
        sandbox.push("allow-forms");
    }
    if caps.popups {
        sandbox.push("allow-popups");
    }
    if caps.modals {
        sandbox.push("allow-modals");
    }
    if caps.pointer_lock {
        sandbox.push("allow-pointer-lock");
    }
    if caps.presentation {
        sandbox.push("allow-presentation");
    }
    if caps.top_navigation {
        sandbox.push("allow-top-navigation");
    }
    // Same-origin only alongside other grants; never alone.
    if !sandbox.is_empty() {
        sandbox.push(SAME_ORIGIN_TOKEN);
    }

    let mut allow = Vec::new();
    if caps.autoplay {
        allow.push("autoplay");
    }
    if caps.camera {
        allow.push("camera");
    }
    if caps.microphone {
        allow.push("microphone");
    }
    if caps.geolocation {
        allow.push("geolocation");
    }
    if caps.clipboard {
        allow.push("clipboard-write");
    }
    if caps.payment_request {
        allow.push("payment");
    }

    DerivedTokens { sandbox, allow }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_flags_off_yields_empty_grammars() {
        let tokens = derive_tokens(&Capabilities::none());
        assert!(tokens.sandbox.is_empty());
        assert!(tokens.allow.is_empty());
    }

    #[test]
    fn same_origin_never_alone() {
        let mut caps = Capabilities::none();
        caps.scripts = true;
        let tokens = derive_tokens(&caps);
        assert_eq!(tokens.sandbox, vec!["allow-scripts", SAME_ORIGIN_TOKEN]);
        assert!(tokens.allow.is_empty());
    }

    #[test]
    fn sandbox_order_is_fixed() {
        let caps = Capabilities {
            scripts: true,
            forms: true,
            popups: true,
            modals: true,
            pointer_lock: true,
            presentation: true,
            top_navigation: true,
            ..Capabilities::none()
        };
        assert_eq!(
            derive_tokens(&caps).sandbox,
            vec![
                "allow-scripts",
                "allow-forms",
                "allow-popups",
                "allow-modals",
                "allow-pointer-lock",
                "allow-presentation",
                "allow-top-navigation",
                SAME_ORIGIN_TOKEN,
            ]
        );
    }

    #[test]
    fn allow_order_is_fixed() {
        let caps = Capabilities {
            autoplay: true,
            camera: true,
            microphone: true,
            geolocation: true,
            clipboard: true,
            payment_request: true,
            ..Capabilities::none()
        };
        assert_eq!(
            derive_tokens(&caps).allow,
            vec![
                "autoplay",
                "camera",
                "microphone",
                "geolocation",
                "clipboard-write",
                "payment",
            ]
        );
    }

    #[test]
    fn fullscreen_in_neither_grammar() {
        let mut caps = Capabilities::none();
        caps.fullscreen = true;
        let tokens = derive_tokens(&caps);
        assert!(tokens.sandbox.is_empty());
        assert!(tokens.allow.is_empty());
    }
}
