//! Download failure sentinel and its underlying causes.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Single failure kind returned by the downloader. Callers test membership
/// by type (e.g. `downcast_ref::<DownloadFailed>()`), never by message; the
/// wrapped cause stays available for diagnostics via the error chain.
#[derive(Debug, Error)]
#[error("download failed: {cause}")]
pub struct DownloadFailed {
    #[from]
    pub cause: DownloadCause,
}

/// What actually went wrong during a download attempt.
#[derive(Debug, Error)]
pub enum DownloadCause {
    /// The URL did not parse; no temp file is created and no request issued.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    /// curl transport failure: DNS, connect, timeout, or mid-stream drop.
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// Response status outside 2xx. The body, if any, never reaches the
    /// destination path.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    /// Filesystem failure creating, writing, or renaming the artifact.
    #[error("storage {}: {}", .path.display(), .source)]
    Storage { path: PathBuf, source: io::Error },
}
