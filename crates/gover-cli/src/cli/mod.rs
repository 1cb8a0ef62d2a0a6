//! CLI for the gover release updater.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gover_core::config;
use std::path::PathBuf;

use commands::{run_check, run_checksum, run_update};

/// Top-level CLI for the gover release updater.
#[derive(Debug, Parser)]
#[command(name = "gover")]
#[command(about = "gover: check, download, and verify the latest Go release", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether a newer release is available for this platform.
    Check {
        /// Installed version to compare against (e.g. "go1.22.5").
        #[arg(long)]
        current: Option<String>,
    },

    /// Download and verify the latest release, then print how to install it.
    Update {
        /// Re-download even if a verified copy already exists locally.
        #[arg(long)]
        force: bool,

        /// Directory to place the artifact in (default: current directory).
        #[arg(long, value_name = "PATH")]
        dir: Option<PathBuf>,

        /// Installed version; the download is skipped when already current.
        #[arg(long)]
        current: Option<String>,
    },

    /// Compute SHA-256 of a file (e.g. to re-check a download).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { current } => run_check(&cfg, current.as_deref())?,
            CliCommand::Update {
                force,
                dir,
                current,
            } => run_update(&cfg, force, dir, current.as_deref())?,
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}
