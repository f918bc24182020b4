//! Output path derivation and file writes.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use identicon_export::png::EXTENSION;

use crate::error::CliError;

/// `<out_dir>/<input>.png`.
///
/// The input is used verbatim, including bytes that are not UTF-8.
/// Separators inside it create subdirectory paths, and a missing
/// directory surfaces as a write error rather than being created.
pub fn output_path(input: &OsStr, out_dir: &Path) -> PathBuf {
    let mut name = input.to_os_string();
    name.push(".");
    name.push(EXTENSION);
    out_dir.join(name)
}

/// Write `bytes` to `path` once. Failures are not retried.
///
/// # Errors
///
/// Returns [`CliError::Write`] carrying `path` if the write fails.
pub fn write_image(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    std::fs::write(path, bytes).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
