//! Rename engine: a single linear pass over the source directory.

use std::path::Path;

use tracing::{debug, info};

use crate::api::results::{RenameRecord, RenameSummary};
use crate::core::config::RenamerConfig;
use crate::core::errors::Result;
use crate::core::file_utils::{
    copy_contents, copy_preserving_metadata, ensure_directory, list_sorted_entries, SourceEntry,
};
use crate::core::naming::NamingScheme;

/// A copy the engine would perform for a source entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    /// Source entry
    pub entry: SourceEntry,
    /// Name the copy receives in the target directory
    pub new_name: String,
}

/// Everything a run would copy, computed from one directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Entries listed in the source directory
    pub entries_scanned: usize,
    /// Accepted entries in sorted order
    pub copies: Vec<PlannedCopy>,
}

/// Copies matching source files into the target directory under new names.
#[derive(Debug, Clone)]
pub struct RenameEngine {
    config: RenamerConfig,
    scheme: NamingScheme,
}

impl RenameEngine {
    /// Create an engine after validating the configuration.
    pub fn new(config: RenamerConfig, scheme: NamingScheme) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, scheme })
    }

    /// Engine configuration
    pub fn config(&self) -> &RenamerConfig {
        &self.config
    }

    /// List the source directory and compute every target name without
    /// touching the target directory.
    pub fn plan(&self) -> Result<RenamePlan> {
        let entries = list_sorted_entries(&self.config.source_dir)?;
        let entries_scanned = entries.len();

        let mut copies = Vec::new();
        for entry in entries {
            if let Some(new_name) = self.scheme.target_name(&entry.file_name, copies.len()) {
                copies.push(PlannedCopy { entry, new_name });
            }
        }
        Ok(RenamePlan {
            entries_scanned,
            copies,
        })
    }

    /// Run without observing individual copies.
    pub fn run(&self) -> Result<RenameSummary> {
        self.run_with(|_| {})
    }

    /// Run the full pass, calling `on_copied` after each successful copy.
    ///
    /// The first filesystem error aborts the run; files copied before it stay
    /// in place.
    pub fn run_with<F>(&self, mut on_copied: F) -> Result<RenameSummary>
    where
        F: FnMut(&RenameRecord),
    {
        let target_dir = &self.config.target_dir;
        ensure_directory(target_dir)?;

        info!(
            "Renaming {} -> {} ({:?})",
            self.config.source_dir.display(),
            target_dir.display(),
            self.scheme
        );

        let RenamePlan {
            entries_scanned,
            copies,
        } = self.plan()?;
        let mut records = Vec::with_capacity(copies.len());

        for PlannedCopy { entry, new_name } in copies {
            let destination = target_dir.join(&new_name);
            let bytes = self.copy(&entry.path, &destination)?;

            let record = RenameRecord {
                scheme: self.scheme,
                source: entry.path,
                original_name: entry.file_name,
                destination,
                new_name,
                bytes,
            };
            on_copied(&record);
            records.push(record);
        }

        let summary = RenameSummary {
            scheme: self.scheme,
            entries_scanned,
            records,
        };
        debug!(
            "Copied {} of {} entries ({} skipped)",
            summary.count(),
            summary.entries_scanned,
            summary.skipped()
        );
        Ok(summary)
    }

    fn copy(&self, src: &Path, dst: &Path) -> Result<u64> {
        match self.scheme {
            NamingScheme::FrameIndex => copy_preserving_metadata(src, dst),
            NamingScheme::Sequential => copy_contents(src, dst),
        }
    }
}
