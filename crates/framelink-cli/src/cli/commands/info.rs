//! `presets`, `caps`, and `completions` listings.

use clap::CommandFactory;
use clap_complete::Shell;
use framelink_core::caps::{FlagGroup, FLAGS};
use framelink_core::presets::{CAPABILITY_PRESETS, DIMENSION_PRESETS};
use framelink_core::render::format_dimension;

use crate::cli::Cli;

pub fn run_presets() {
    println!("Dimension presets:");
    for preset in DIMENSION_PRESETS {
        println!(
            "  {:<12} {} x {}",
            preset.name,
            format_dimension(&preset.width),
            format_dimension(&preset.height)
        );
    }

    println!();
    println!("Capability presets:");
    for preset in CAPABILITY_PRESETS {
        println!("  {:<12} {}", preset.name, preset.description);
    }
}

pub fn run_caps() {
    for group in [FlagGroup::General, FlagGroup::DeviceAccess, FlagGroup::Sandbox] {
        println!("{}:", group.title());
        for spec in FLAGS.iter().filter(|f| f.group == group) {
            println!("  {:<24} {}", spec.param, spec.description);
        }
        println!();
    }
}

pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "framelink", &mut std::io::stdout());
}
