//! Results of a rename run.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::naming::NamingScheme;

/// One successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    /// Scheme that produced the new name
    pub scheme: NamingScheme,
    /// Source path
    pub source: PathBuf,
    /// Original file name in the source directory
    pub original_name: String,
    /// Path written in the target directory
    pub destination: PathBuf,
    /// New file name in the target directory
    pub new_name: String,
    /// Number of bytes copied
    pub bytes: u64,
}

impl RenameRecord {
    /// Human-readable progress line printed after the copy.
    pub fn progress_line(&self) -> String {
        match self.scheme {
            NamingScheme::FrameIndex => {
                format!("Moved {} -> {}", self.original_name, self.new_name)
            }
            NamingScheme::Sequential => {
                format!("Copied {} to {}", self.original_name, self.new_name)
            }
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSummary {
    /// Scheme used for the run
    pub scheme: NamingScheme,
    /// Entries listed in the source directory, including skipped ones
    pub entries_scanned: usize,
    /// Successful copies, in processing order
    pub records: Vec<RenameRecord>,
}

impl RenameSummary {
    /// Number of successful copies. Duplicate target names count once per copy.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Entries that were listed but not copied.
    pub fn skipped(&self) -> usize {
        self.entries_scanned.saturating_sub(self.records.len())
    }

    /// Distinct file names written to the target directory.
    pub fn written_names(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.new_name.as_str()).collect()
    }

    /// Final summary line printed after all entries are processed.
    pub fn summary_line(&self) -> String {
        match self.scheme {
            NamingScheme::FrameIndex => {
                format!("Successfully processed {} images.", self.count())
            }
            NamingScheme::Sequential => format!("Processed {} files.", self.count()),
        }
    }
}
