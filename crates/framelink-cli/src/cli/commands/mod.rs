//! One `run_*` per subcommand. These stay thin: build the configuration,
//! call into framelink-core, print the result.

mod embed;
mod info;
mod restore;

pub use embed::{run_link, run_render};
pub use info::{run_caps, run_completions, run_presets};
pub use restore::{run_check, run_decode};
