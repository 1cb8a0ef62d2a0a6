//! Temp-file lifecycle and atomic commit.
//!
//! Downloads are written to `<dest>.part` and renamed onto the destination
//! only after the stream completed and the file is closed; the destination
//! path never observes a partially written file.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path
/// (e.g. `go1.22.5.linux-amd64.tar.gz` -> `go1.22.5.linux-amd64.tar.gz.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Create or truncate the temp file for writing.
pub fn create_temp(path: &Path) -> io::Result<File> {
    File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Atomically rename the fully written temp file onto the destination,
/// overwriting any pre-existing file there. The temp file must be closed
/// before calling this.
pub fn commit(temp_path: &Path, final_path: &Path) -> io::Result<()> {
    fs::rename(temp_path, final_path)
}

/// Best-effort removal of the temp file on an aborted attempt. Failure is
/// logged at debug and never escalated.
pub fn discard(temp_path: &Path) {
    if let Err(err) = fs::remove_file(temp_path) {
        if err.kind() != io::ErrorKind::NotFound {
            tracing::debug!(path = %temp_path.display(), %err, "could not remove temp file");
        }
    }
}
