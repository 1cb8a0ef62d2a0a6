//! `gover update` – verified download of the latest release.

use anyhow::{Context, Result};
use gover_core::config::GoverConfig;
use gover_core::platform;
use gover_core::release;
use gover_core::update;
use std::path::PathBuf;

pub fn run_update(
    cfg: &GoverConfig,
    force: bool,
    dir: Option<PathBuf>,
    current: Option<&str>,
) -> Result<()> {
    let host = platform::host();
    let kind = platform::preferred_kind(&host.os);

    let releases = release::fetch_index(&cfg.index_url)
        .with_context(|| format!("fetch release index {}", cfg.index_url))?;
    let file = release::find_matching(&releases, &host.os, &host.arch, kind)
        .with_context(|| format!("no {} release for {}.{}", kind, host.os, host.arch))?;

    println!("Latest : {} on {}.{}", file.version, file.os, file.arch);
    if let Some(cur) = current {
        if cur == file.version && !force {
            println!("Already at {}; nothing to do.", cur);
            return Ok(());
        }
    }

    let dest_dir = match dir {
        Some(d) => d,
        None => std::env::current_dir()?,
    };
    let report = update::fetch_artifact(file, cfg, &dest_dir, force)
        .with_context(|| format!("fetch {}", file.filename))?;

    if report.skipped {
        println!(
            "{} already downloaded and verified.",
            report.path.display()
        );
    } else {
        println!(
            "Downloaded {} ({} bytes, sha256 {}).",
            report.path.display(),
            report.size,
            report.sha256
        );
    }

    if let Some(hint) = platform::install_hint(&host.os, &file.filename) {
        println!("Run the following command to install:");
        println!("{}", hint);
    }
    Ok(())
}
