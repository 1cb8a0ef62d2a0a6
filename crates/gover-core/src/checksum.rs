//! Whole-file digesting, used by the skip-if-verified pre-check and the
//! `checksum` command. Runs after (or instead of) a transfer, never on the
//! streaming hot path — the downloader hashes inline.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute digest `D` over the file contents, returned as lowercase hex.
/// Chunked reads keep memory bounded for multi-hundred-MiB artifacts.
pub fn digest_path<D: Digest>(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = D::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// SHA-256 of a file as lowercase hex (the digest the release index publishes).
pub fn sha256_path(path: &Path) -> Result<String> {
    digest_path::<Sha256>(path)
}
