//! CLI for the Framelink embed configurator.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use framelink_core::config;

use args::EmbedArgs;
use commands::{
    run_caps, run_check, run_completions, run_decode, run_link, run_presets, run_render,
};

/// Top-level CLI for the Framelink embed configurator.
#[derive(Debug, Parser)]
#[command(name = "framelink")]
#[command(about = "Framelink: iframe embed configurator and share-link codec", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Render the embed text for a configuration built from flags.
    Render {
        #[command(flatten)]
        embed: EmbedArgs,
    },

    /// Build a shareable link carrying the full configuration.
    Link {
        #[command(flatten)]
        embed: EmbedArgs,

        /// Base URL for the link (default from config.toml).
        #[arg(long)]
        base: Option<String>,
    },

    /// Restore a configuration from a share link (or bare query string)
    /// and render it.
    Decode {
        /// Share link, `?query`, or bare query string.
        link: String,
    },

    /// Check whether an address is embeddable.
    Check {
        /// Candidate URL (scheme optional; https is assumed).
        url: String,
    },

    /// List dimension and capability presets.
    Presets,

    /// List the 14 capability flags by group.
    Caps,

    /// Generate shell completions.
    Completions {
        /// Shell to generate for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Render { embed } => run_render(&embed, &cfg)?,
            CliCommand::Link { embed, base } => run_link(&embed, base.as_deref(), &cfg)?,
            CliCommand::Decode { link } => run_decode(&link),
            CliCommand::Check { url } => run_check(&url)?,
            CliCommand::Presets => run_presets(),
            CliCommand::Caps => run_caps(),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}
