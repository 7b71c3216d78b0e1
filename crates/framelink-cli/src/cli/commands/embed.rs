//! `render` and `link`: flags in, embed text or share link out.

use anyhow::Result;
use framelink_core::config::FramelinkConfig;
use framelink_core::embed::EmbedConfig;
use framelink_core::render::render_embed;
use framelink_core::share::build_share_link;
use framelink_core::validate::validate_config;

use crate::cli::args::EmbedArgs;

fn assemble(args: &EmbedArgs, cfg: &FramelinkConfig) -> Result<EmbedConfig> {
    let config = args.config(cfg.context_scheme)?;

    // Validation reports, never blocks: the embed is printed regardless.
    let report = validate_config(&config);
    if let Some(msg) = &report.url {
        tracing::warn!(field = "url", "{msg}");
    }
    if let Some(msg) = &report.width {
        tracing::warn!(field = "width", "{msg}");
    }
    if let Some(msg) = &report.height {
        tracing::warn!(field = "height", "{msg}");
    }

    Ok(config)
}

pub fn run_render(args: &EmbedArgs, cfg: &FramelinkConfig) -> Result<()> {
    let config = assemble(args, cfg)?;
    println!("{}", render_embed(&config));
    Ok(())
}

pub fn run_link(args: &EmbedArgs, base: Option<&str>, cfg: &FramelinkConfig) -> Result<()> {
    let config = assemble(args, cfg)?;
    let base = base.unwrap_or(&cfg.share_base_url);
    println!("{}", build_share_link(base, &config));
    Ok(())
}
