//! Filesystem helpers for a rename run.
//!
//! Listing is non-recursive and sorted by file name. Copies either replicate
//! timestamps and permission bits or copy content only.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::core::errors::{RenamerError, Result};

/// A single entry of the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Full path to the entry
    pub path: PathBuf,
    /// File name, lossily converted for matching and display
    pub file_name: String,
}

/// List the immediate entries of `dir`, sorted ascending by file name.
///
/// The whole listing is collected before returning. Any failure to read the
/// directory, including `dir` not being a directory, is returned as an I/O
/// error naming `dir`.
pub fn list_sorted_entries(dir: &Path) -> Result<Vec<SourceEntry>> {
    // walkdir yields nothing past min_depth for a plain-file root
    let metadata = fs::metadata(dir)
        .map_err(|e| RenamerError::io_at("Failed to list source directory", dir, e))?;
    if !metadata.is_dir() {
        return Err(RenamerError::io_at(
            "Failed to list source directory",
            dir,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let message = e.to_string();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
            RenamerError::io_at("Failed to list source directory", dir, source)
        })?;
        entries.push(SourceEntry {
            file_name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
        });
    }

    debug!("Listed {} entries in {}", entries.len(), dir.display());
    Ok(entries)
}

/// Create `dir` and any missing parents. Existing directories are reused.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!("Creating target directory {}", dir.display());
    fs::create_dir_all(dir)
        .map_err(|e| RenamerError::io_at("Failed to create target directory", dir, e))
}

/// Copy file content only, overwriting `dst`. Returns the number of bytes copied.
pub fn copy_contents(src: &Path, dst: &Path) -> Result<u64> {
    fs::copy(src, dst).map_err(|e| RenamerError::io_at("Failed to copy file", src, e))
}

/// Copy content, permission bits, and access/modification times from `src`
/// to `dst`, overwriting `dst`. Returns the number of bytes copied.
pub fn copy_preserving_metadata(src: &Path, dst: &Path) -> Result<u64> {
    // fs::copy already carries permission bits over
    let bytes = copy_contents(src, dst)?;

    let metadata =
        fs::metadata(src).map_err(|e| RenamerError::io_at("Failed to read metadata", src, e))?;
    let modified = metadata
        .modified()
        .map_err(|e| RenamerError::io_at("Failed to read modification time", src, e))?;

    let mut times = FileTimes::new().set_modified(modified);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    let file = open_for_times(dst)?;
    file.set_times(times)
        .map_err(|e| RenamerError::io_at("Failed to set file times", dst, e))?;

    Ok(bytes)
}

/// Open `path` so its timestamps can be set.
///
/// Read-only copies cannot be reopened for writing; setting timestamps only
/// needs ownership, so a read-only handle is tried next. When both fail the
/// write-open error is reported.
fn open_for_times(path: &Path) -> Result<File> {
    match File::options().write(true).open(path) {
        Ok(file) => Ok(file),
        Err(write_err) => File::open(path)
            .map_err(|_| RenamerError::io_at("Failed to open copied file", path, write_err)),
    }
}
