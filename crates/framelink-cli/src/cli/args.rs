//! Flag-to-configuration assembly shared by `render` and `link`.

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use framelink_core::address::{sanitize_address, ContextScheme};
use framelink_core::embed::{Capabilities, CustomAttribute, EmbedConfig, Unit};
use framelink_core::presets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Px,
    Percent,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Unit {
        match arg {
            UnitArg::Px => Unit::Px,
            UnitArg::Percent => Unit::Percent,
        }
    }
}

/// Everything needed to assemble an `EmbedConfig` on the command line.
#[derive(Debug, Args)]
pub struct EmbedArgs {
    /// Source URL to embed (scheme optional; https is assumed).
    pub url: String,

    /// Frame width (default 800, or the preset's width).
    #[arg(long)]
    pub width: Option<f64>,

    /// Frame height (default 600, or the preset's height).
    #[arg(long)]
    pub height: Option<f64>,

    /// Width unit.
    #[arg(long, value_enum)]
    pub width_unit: Option<UnitArg>,

    /// Height unit.
    #[arg(long, value_enum)]
    pub height_unit: Option<UnitArg>,

    /// Accessible title attribute.
    #[arg(long)]
    pub title: Option<String>,

    /// Frame name attribute (link/form targeting).
    #[arg(long = "name")]
    pub frame_name: Option<String>,

    /// Dimension preset: mobile, tablet, desktop, full-width.
    #[arg(long)]
    pub preset: Option<String>,

    /// Capability preset: permissive, secure, media, interactive.
    #[arg(long)]
    pub caps_preset: Option<String>,

    #[arg(long)]
    pub allow_fullscreen: bool,
    #[arg(long)]
    pub allow_payment_request: bool,
    #[arg(long)]
    pub allow_autoplay: bool,
    #[arg(long)]
    pub allow_camera: bool,
    #[arg(long)]
    pub allow_microphone: bool,
    #[arg(long)]
    pub allow_geolocation: bool,
    #[arg(long)]
    pub allow_clipboard: bool,
    #[arg(long)]
    pub allow_popups: bool,
    #[arg(long)]
    pub allow_scripts: bool,
    #[arg(long)]
    pub allow_forms: bool,
    #[arg(long)]
    pub allow_modals: bool,
    #[arg(long)]
    pub allow_pointer_lock: bool,
    #[arg(long)]
    pub allow_presentation: bool,
    #[arg(long)]
    pub allow_top_navigation: bool,

    /// Extra attribute as NAME=VALUE (repeatable, kept in order).
    #[arg(long = "custom", value_name = "NAME=VALUE")]
    pub custom: Vec<String>,
}

impl EmbedArgs {
    fn any_flag_set(&self) -> bool {
        self.allow_fullscreen
            || self.allow_payment_request
            || self.allow_autoplay
            || self.allow_camera
            || self.allow_microphone
            || self.allow_geolocation
            || self.allow_clipboard
            || self.allow_popups
            || self.allow_scripts
            || self.allow_forms
            || self.allow_modals
            || self.allow_pointer_lock
            || self.allow_presentation
            || self.allow_top_navigation
    }

    /// Resolves the capability set. A preset or any explicit flag switches
    /// to an all-false base, so the command line says exactly what you get;
    /// with neither, the creation defaults apply.
    pub fn capabilities(&self) -> Result<Capabilities> {
        let mut caps = if let Some(name) = &self.caps_preset {
            presets::find_capability_preset(name)
                .with_context(|| format!("unknown capability preset: {name}"))?
                .capabilities
        } else if self.any_flag_set() {
            Capabilities::none()
        } else {
            Capabilities::default()
        };

        caps.fullscreen |= self.allow_fullscreen;
        caps.payment_request |= self.allow_payment_request;
        caps.autoplay |= self.allow_autoplay;
        caps.camera |= self.allow_camera;
        caps.microphone |= self.allow_microphone;
        caps.geolocation |= self.allow_geolocation;
        caps.clipboard |= self.allow_clipboard;
        caps.popups |= self.allow_popups;
        caps.scripts |= self.allow_scripts;
        caps.forms |= self.allow_forms;
        caps.modals |= self.allow_modals;
        caps.pointer_lock |= self.allow_pointer_lock;
        caps.presentation |= self.allow_presentation;
        caps.top_navigation |= self.allow_top_navigation;

        Ok(caps)
    }

    /// Assembles the full configuration: preset sizes first, explicit
    /// flags override, address sanitized with the configured context.
    pub fn config(&self, context: ContextScheme) -> Result<EmbedConfig> {
        let mut config = EmbedConfig::default();

        if let Some(name) = &self.preset {
            let preset = presets::find_dimension_preset(&name.replace('-', " "))
                .with_context(|| format!("unknown dimension preset: {name}"))?;
            config.width = preset.width;
            config.height = preset.height;
        }
        if let Some(width) = self.width {
            config.width.magnitude = width;
        }
        if let Some(height) = self.height {
            config.height.magnitude = height;
        }
        if let Some(unit) = self.width_unit {
            config.width.unit = unit.into();
        }
        if let Some(unit) = self.height_unit {
            config.height.unit = unit.into();
        }

        config.address = sanitize_address(&self.url, context);
        config.title = self.title.clone().unwrap_or_default();
        config.frame_name = self.frame_name.clone().unwrap_or_default();
        config.capabilities = self.capabilities()?;

        for pair in &self.custom {
            let Some((name, value)) = pair.split_once('=') else {
                bail!("--custom expects NAME=VALUE, got: {pair}");
            };
            config
                .custom_attributes
                .push(CustomAttribute::new(name, value));
        }

        Ok(config)
    }
}
