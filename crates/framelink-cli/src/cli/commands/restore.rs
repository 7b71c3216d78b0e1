//! `decode` and `check`: inbound links and addresses.

use anyhow::{bail, Result};
use framelink_core::address::validate_address;
use framelink_core::render::render_embed;
use framelink_core::share::decode_share_link;

pub fn run_decode(link: &str) {
    match decode_share_link(link) {
        Some(config) => println!("{}", render_embed(&config)),
        // Defined outcome, not an error: the link simply has nothing stored.
        None => println!("no embed configuration in link"),
    }
}

pub fn run_check(url: &str) -> Result<()> {
    match validate_address(url) {
        Ok(()) => {
            println!("ok");
            Ok(())
        }
        Err(err) => bail!("{url}: {err}"),
    }
}
