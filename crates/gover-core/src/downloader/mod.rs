//! Verified single-stream downloader.
//!
//! Streams one HTTP GET through a [`ProgressWriter`] into `<dest>.part`,
//! then atomically renames onto the destination. Exactly one read of the
//! network body produces both the persisted bytes and the digest. Any
//! failure removes the temp file and leaves a pre-existing destination
//! untouched; verification against expected size/checksum is the caller's
//! job on the returned measurements.

mod error;

pub use error::{DownloadCause, DownloadFailed};

use crate::progress::ProgressWriter;
use crate::storage;
use sha2::Digest;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(3600);

/// Measured result of a committed download. Only meaningful when returned
/// without an error.
#[derive(Debug, Clone)]
pub struct Downloaded {
    /// Bytes actually written to the destination file.
    pub size: u64,
    /// Lowercase hex digest of exactly those bytes.
    pub digest: String,
}

/// Download `url` into `dest`, computing a `D` digest on the fly.
///
/// `expected_size` only drives the progress display; the returned size is
/// whatever the server actually sent. The destination is either replaced
/// atomically with the complete file or left exactly as it was.
pub fn download<D: Digest>(
    url: &str,
    dest: &Path,
    expected_size: u64,
) -> Result<Downloaded, DownloadFailed> {
    let parsed = Url::parse(url).map_err(|source| {
        DownloadFailed::from(DownloadCause::InvalidUrl {
            url: url.to_string(),
            source,
        })
    })?;

    let temp = storage::temp_path(dest);
    let result = stream_to_temp::<D>(&parsed, &temp, dest, expected_size);
    if result.is_err() {
        storage::discard(&temp);
    }
    result.map_err(DownloadFailed::from)
}

/// Runs one attempt end to end: create temp, GET, stream through the sink,
/// check status, commit. The caller removes the temp file on any error.
fn stream_to_temp<D: Digest>(
    url: &Url,
    temp: &Path,
    dest: &Path,
    expected_size: u64,
) -> Result<Downloaded, DownloadCause> {
    let file = storage::create_temp(temp).map_err(|source| DownloadCause::Storage {
        path: temp.to_path_buf(),
        source,
    })?;
    let mut sink: ProgressWriter<_, D> = ProgressWriter::new(file, expected_size);
    let mut write_err: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(TRANSFER_TIMEOUT)?;

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match sink.write_all(data) {
            Ok(()) => Ok(data.len()),
            Err(err) => {
                write_err = Some(err);
                Ok(0) // abort the transfer
            }
        })?;
        transfer.perform()
    };

    // A storage error inside the write callback surfaces from curl as a
    // write error; report the original cause instead.
    if let Some(source) = write_err {
        return Err(DownloadCause::Storage {
            path: temp.to_path_buf(),
            source,
        });
    }
    perform_result?;

    let code = easy.response_code()?;
    if code < 200 || code >= 300 {
        return Err(DownloadCause::Status {
            url: url.to_string(),
            code,
        });
    }

    // Terminates the progress line and closes the temp file before rename.
    let (size, digest) = sink.finish();

    storage::commit(temp, dest).map_err(|source| DownloadCause::Storage {
        path: dest.to_path_buf(),
        source,
    })?;
    tracing::debug!(url = %url, path = %dest.display(), size, "download committed");

    Ok(Downloaded { size, digest })
}
