//! Framelink core: embed configuration model, address sanitization and
//! validation, capability-token derivation, the ParameterSet codec, and
//! the embed text generator. Everything here is pure and synchronous; the
//! CLI (and any other front end) holds the state and calls in.

pub mod config;
pub mod logging;

pub mod address;
pub mod caps;
pub mod embed;
pub mod params;
pub mod presets;
pub mod render;
pub mod share;
pub mod tokens;
pub mod validate;
