//! Update orchestration: optional skip-if-verified pre-check, verified
//! download, and comparison of the measured size/digest against the release
//! descriptor.

use crate::checksum;
use crate::config::GoverConfig;
use crate::downloader::{self, DownloadFailed};
use crate::release::ReleaseFile;
use sha2::Sha256;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Mismatch between measured and expected artifact metadata. Distinct from
/// [`DownloadFailed`]: the transfer itself succeeded, the content is wrong.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("sha256 mismatch for {}: got {}, want {}", .path.display(), .got, .want)]
    ChecksumMismatch {
        path: PathBuf,
        got: String,
        want: String,
    },
    #[error("size mismatch for {}: got {}, want {}", .path.display(), .got, .want)]
    SizeMismatch { path: PathBuf, got: u64, want: u64 },
}

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Download(#[from] DownloadFailed),
    #[error(transparent)]
    Verify(#[from] VerifyError),
    #[error("invalid artifact URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Outcome of [`fetch_artifact`].
#[derive(Debug)]
pub struct UpdateReport {
    pub path: PathBuf,
    pub size: u64,
    pub sha256: String,
    /// True when the pre-check found an already-verified file and no
    /// request was made.
    pub skipped: bool,
}

/// True when `path` already holds exactly `expected_size` bytes hashing to
/// `expected_sha256`. Any probe error counts as "not verified".
pub fn already_verified(path: &Path, expected_size: u64, expected_sha256: &str) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() == expected_size => {}
        _ => return false,
    }
    match checksum::sha256_path(path) {
        Ok(digest) => digest == expected_sha256,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "pre-check hash failed");
            false
        }
    }
}

/// Download `file` into `dest_dir` and verify its size and checksum against
/// the release descriptor. When `cfg.skip_verified` is set and `force` is
/// not, an already-correct file short-circuits without any network request.
pub fn fetch_artifact(
    file: &ReleaseFile,
    cfg: &GoverConfig,
    dest_dir: &Path,
    force: bool,
) -> Result<UpdateReport, UpdateError> {
    let dest = dest_dir.join(&file.filename);

    if cfg.skip_verified && !force && already_verified(&dest, file.size, &file.sha256) {
        tracing::info!(path = %dest.display(), "existing file verified, skipping download");
        return Ok(UpdateReport {
            path: dest,
            size: file.size,
            sha256: file.sha256.clone(),
            skipped: true,
        });
    }

    let url = Url::parse(&cfg.download_prefix_url)?.join(&file.filename)?;
    let out = downloader::download::<Sha256>(url.as_str(), &dest, file.size)?;

    if out.digest != file.sha256 {
        tracing::warn!(path = %dest.display(), got = %out.digest, want = %file.sha256, "checksum mismatch");
        return Err(VerifyError::ChecksumMismatch {
            path: dest,
            got: out.digest,
            want: file.sha256.clone(),
        }
        .into());
    }
    if out.size != file.size {
        tracing::warn!(path = %dest.display(), got = out.size, want = file.size, "size mismatch");
        return Err(VerifyError::SizeMismatch {
            path: dest,
            got: out.size,
            want: file.size,
        }
        .into());
    }

    Ok(UpdateReport {
        path: dest,
        size: out.size,
        sha256: out.digest,
        skipped: false,
    })
}
