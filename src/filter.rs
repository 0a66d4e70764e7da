//! Existence filter: keeps index entries whose quiz file exists and validates.
//!
//! Each entry costs one existence check and one read, all run in parallel
//! with rayon. Results are collected through an indexed parallel iterator, so
//! the output keeps the order of `index.json` regardless of which check
//! finishes first.

use crate::fs::Filesystem;
use crate::loader;
use crate::types::{IndexEntry, ValidatedEntry};
use crate::validate::{Mode, validate};
use rayon::prelude::*;
use std::path::Path;
use tracing::warn;

/// Keep the entries whose `file` (resolved under `data_root`) exists and
/// passes document validation. Entries pointing outside `data_root`, missing
/// files and invalid files are dropped; none of them stops the batch.
///
/// Each drop is logged once, where it is detected: here for escaping paths
/// and missing files, in the loader or validator for unreadable or invalid
/// content.
pub fn filter_existing(
    fs: &impl Filesystem,
    data_root: &Path,
    entries: Vec<IndexEntry>,
) -> Vec<ValidatedEntry> {
    entries
        .into_par_iter()
        .map(|entry| check_entry(fs, data_root, entry))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

fn check_entry(fs: &impl Filesystem, data_root: &Path, entry: IndexEntry) -> Option<ValidatedEntry> {
    if !entry.is_contained() {
        warn!(file = %entry.file, "Skipping entry outside the data directory");
        return None;
    }

    let path = data_root.join(&entry.file);
    if !fs.exists(&path) {
        warn!(path = %path.display(), "JSON file not found");
        return None;
    }

    loader::load(fs, &path)
        .filter(|doc| validate(doc, Mode::Document))
        .map(|_| ValidatedEntry::new(entry))
}
