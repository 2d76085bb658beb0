//! Source file discovery.
//!
//! Paths named on the command line are analyzed as given; directories are
//! walked recursively, keeping files with a configured extension and
//! skipping ignored names. Symbolic links inside a walked directory are not
//! followed.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::config::NotyposConfig;
use crate::error::{NotyposError, Result};

/// Collect the source files under `paths`, sorted and without duplicates.
///
/// # Errors
///
/// Returns `Io` for a path that does not exist or cannot be read.
pub fn collect_sources(paths: &[PathBuf], config: &NotyposConfig) -> Result<Vec<PathBuf>> {
    let mut found = BTreeSet::new();

    for path in paths {
        let metadata = fs::metadata(path).map_err(|e| {
            NotyposError::Other(anyhow::anyhow!("Cannot read {}: {}", path.display(), e))
        })?;
        if metadata.is_dir() {
            walk_dir(path, config, &mut found)?;
        } else {
            found.insert(path.clone());
        }
    }

    debug!(count = found.len(), "Collected source files");
    Ok(found.into_iter().collect())
}

fn walk_dir(dir: &Path, config: &NotyposConfig, found: &mut BTreeSet<PathBuf>) -> Result<()> {
    let walker = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry, config));

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && has_source_extension(entry.path(), config) {
            found.insert(entry.into_path());
        }
    }

    Ok(())
}

fn is_ignored(entry: &DirEntry, config: &NotyposConfig) -> bool {
    let ignored = config.is_ignored(&entry.file_name().to_string_lossy());
    if ignored {
        trace!(path = %entry.path().display(), "Skipping ignored path");
    }
    ignored
}

fn has_source_extension(path: &Path, config: &NotyposConfig) -> bool {
    path.extension()
        .is_some_and(|e| config.accepts_extension(&e.to_string_lossy()))
}
