// Directory walk

use crate::loader::config::LoaderConfig;
use crate::loader::document::read_document;
use crate::loader::error::{LoaderError, Result};
use crate::loader::types::CommandSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Per-scan counters, only used for logging
#[derive(Debug, Default)]
struct ScanStats {
    parsed: usize,
    skipped: usize,
}

/// Walks a directory tree and collects commands from every command file
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Scan `root` recursively
    ///
    /// Entries are visited depth-first in lexical file name order. Broken
    /// files and unreadable subdirectories are logged and skipped; only a
    /// root that cannot be scanned at all is an error.
    pub fn load(&self, root: &Path) -> Result<CommandSet> {
        let metadata = fs::metadata(root).map_err(|source| LoaderError::RootUnavailable {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(LoaderError::NotADirectory(root.to_path_buf()));
        }

        let entries = fs::read_dir(root).map_err(|source| LoaderError::RootUnavailable {
            path: root.to_path_buf(),
            source,
        })?;

        debug!(root = %root.display(), suffix = %self.config.suffix, "scanning for command files");

        let mut set = CommandSet::new();
        let mut stats = ScanStats::default();
        self.visit_entries(root, entries, &mut set, &mut stats);

        info!(
            root = %root.display(),
            files = stats.parsed,
            skipped = stats.skipped,
            powershell = set.powershell.len(),
            cmd = set.cmd.len(),
            "command scan complete"
        );
        Ok(set)
    }

    fn visit_dir(&self, dir: &Path, set: &mut CommandSet, stats: &mut ScanStats) {
        match fs::read_dir(dir) {
            Ok(entries) => self.visit_entries(dir, entries, set, stats),
            Err(e) => warn!(path = %dir.display(), error = %e, "cannot read directory, skipping"),
        }
    }

    fn visit_entries(
        &self,
        dir: &Path,
        entries: fs::ReadDir,
        set: &mut CommandSet,
        stats: &mut ScanStats,
    ) {
        let mut entries: Vec<fs::DirEntry> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(path = %dir.display(), error = %e, "cannot read directory entry, skipping");
                    None
                }
            })
            .collect();
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot stat entry, skipping");
                    continue;
                }
            };

            if file_type.is_dir() {
                self.visit_dir(&path, set, stats);
                continue;
            }

            if !self.config.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }

            match read_document(&path, &self.config) {
                Ok(commands) => {
                    stats.parsed += 1;
                    set.extend(commands);
                }
                Err(e) => {
                    stats.skipped += 1;
                    warn!(path = %path.display(), error = %e, "skipping command file");
                }
            }
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}
