//! `gover check` – report the latest release for this platform.

use anyhow::{Context, Result};
use gover_core::config::GoverConfig;
use gover_core::platform;
use gover_core::release;

pub fn run_check(cfg: &GoverConfig, current: Option<&str>) -> Result<()> {
    let host = platform::host();
    let kind = platform::preferred_kind(&host.os);

    let releases = release::fetch_index(&cfg.index_url)
        .with_context(|| format!("fetch release index {}", cfg.index_url))?;
    let file = release::find_matching(&releases, &host.os, &host.arch, kind)
        .with_context(|| format!("no {} release for {}.{}", kind, host.os, host.arch))?;

    println!("Latest : {} on {}.{}", file.version, file.os, file.arch);
    match current {
        Some(cur) if cur == file.version => println!("Running current version."),
        Some(cur) => println!("Update available (installed: {}).", cur),
        None => {}
    }
    Ok(())
}
