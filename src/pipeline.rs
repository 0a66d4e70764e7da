//! Build orchestration.
//!
//! Runs the stages in order and stops early when a stage leaves nothing to
//! work with:
//!
//! ```text
//! ensure output dir
//!   → load index          not a JSON array        → IndexInvalid
//!   → validate entries    none pass               → NoValidEntries
//!   → filter existing     none exist and validate → NoValidQuizFiles
//!   → render index
//!   → render pages
//! ```
//!
//! An abort is an ordinary, logged outcome returned as [`BuildAborted`]. Once
//! rendering starts nothing aborts: per-page failures land in the
//! [`BuildReport`].

use crate::config::{PipelineConfig, SiteConfig};
use crate::filter::filter_existing;
use crate::fs::Filesystem;
use crate::generate::{self, PageOutcome, RenderContext};
use crate::loader;
use crate::types::{IndexEntry, ValidatedEntry};
use crate::validate;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildAborted {
    #[error("{} is invalid or missing", .0.display())]
    IndexInvalid(PathBuf),
    #[error("No valid entries found in {}", .0.display())]
    NoValidEntries(PathBuf),
    #[error("No valid question files found")]
    NoValidQuizFiles,
}

/// Per-file results of a completed build.
#[derive(Debug)]
pub struct BuildReport {
    pub index: PageOutcome,
    /// One outcome per validated entry, in index order.
    pub pages: Vec<PageOutcome>,
}

impl BuildReport {
    pub fn pages_written(&self) -> usize {
        self.pages.iter().filter(|p| p.is_written()).count()
    }

    pub fn pages_skipped(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p, PageOutcome::Skipped { .. }))
            .count()
    }

    pub fn pages_failed(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p, PageOutcome::Failed { .. }))
            .count()
    }

    /// True when the index and every page were written.
    pub fn is_complete(&self) -> bool {
        self.index.is_written() && self.pages.iter().all(PageOutcome::is_written)
    }
}

/// Run the full pipeline.
pub fn build(
    fs: &impl Filesystem,
    paths: &PipelineConfig,
    site: &SiteConfig,
) -> Result<BuildReport, BuildAborted> {
    info!(index = %paths.index_path.display(), "Starting build");

    ensure_output_dir(fs, &paths.output_root);
    let entries = validated_entries(fs, paths)?;

    let ctx = RenderContext::new(site, &paths.data_root, &paths.output_root);
    let index = generate::render_index(fs, &ctx, &entries);
    let pages = generate::render_pages(fs, &ctx, &entries);

    let report = BuildReport { index, pages };
    info!(
        written = report.pages_written(),
        skipped = report.pages_skipped(),
        failed = report.pages_failed(),
        "Build completed"
    );
    Ok(report)
}

/// Run every stage up to and including the existence filter, writing nothing.
pub fn check(
    fs: &impl Filesystem,
    paths: &PipelineConfig,
) -> Result<Vec<ValidatedEntry>, BuildAborted> {
    validated_entries(fs, paths)
}

fn validated_entries(
    fs: &impl Filesystem,
    paths: &PipelineConfig,
) -> Result<Vec<ValidatedEntry>, BuildAborted> {
    let result = load_index(fs, &paths.index_path)
        .and_then(|values| index_entries(&values, &paths.index_path))
        .and_then(|entries| {
            let existing = filter_existing(fs, &paths.data_root, entries);
            if existing.is_empty() {
                Err(BuildAborted::NoValidQuizFiles)
            } else {
                Ok(existing)
            }
        });

    if let Err(abort) = &result {
        error!("{abort}");
    }
    result
}

/// Directory creation failures are logged, not fatal: the page writes that
/// follow will fail and be reported individually.
fn ensure_output_dir(fs: &impl Filesystem, output_root: &Path) {
    match fs.ensure_dir(output_root) {
        Ok(()) => info!(path = %output_root.display(), "Output directory ready"),
        Err(err) => error!(error = %err, "Failed to create output directory"),
    }
}

fn load_index(fs: &impl Filesystem, path: &Path) -> Result<Vec<Value>, BuildAborted> {
    match loader::load(fs, path) {
        Some(Value::Array(values)) => Ok(values),
        _ => Err(BuildAborted::IndexInvalid(path.to_path_buf())),
    }
}

fn index_entries(values: &[Value], path: &Path) -> Result<Vec<IndexEntry>, BuildAborted> {
    let entries: Vec<IndexEntry> = values.iter().filter_map(validate::index_entry).collect();
    if entries.is_empty() {
        return Err(BuildAborted::NoValidEntries(path.to_path_buf()));
    }
    Ok(entries)
}
