//! Release index client: fetch and decode the downloads JSON feed
//! (`https://golang.org/dl/?mode=json`) and select the artifact matching a
//! platform.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// One downloadable artifact within a release (a row of the downloads page).
/// `sha256` and `size` are the expectations the downloader's measurements
/// are verified against.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseFile {
    pub filename: String,
    pub os: String,
    pub arch: String,
    pub version: String,
    pub sha256: String,
    pub size: u64,
    pub kind: String,
}

/// One published release with its per-platform files. The index lists
/// releases newest-first.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub version: String,
    pub stable: bool,
    pub files: Vec<ReleaseFile>,
}

/// Fetch and decode the release index from `url`.
pub fn fetch_index(url: &str) -> Result<Vec<Release>> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid index URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(REQUEST_TIMEOUT)?;
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {} failed", url))?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        bail!("GET {} returned HTTP {}", url, code);
    }

    tracing::debug!(url, bytes = body.len(), "fetched release index");
    serde_json::from_slice(&body).context("release index is not valid JSON")
}

/// First file matching `os`/`arch`/`kind`; since the index is newest-first,
/// that is the latest release's artifact.
pub fn find_matching<'a>(
    releases: &'a [Release],
    os: &str,
    arch: &str,
    kind: &str,
) -> Option<&'a ReleaseFile> {
    releases
        .iter()
        .flat_map(|r| r.files.iter())
        .find(|f| f.os == os && f.arch == arch && f.kind == kind)
}
