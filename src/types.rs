//! Data model shared by the filter, renderer and CLI output.
//!
//! Every value here is built fresh from disk on each run and dropped once its
//! page is written. Nothing is cached between stages.

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// One `{title, file}` pointer from `index.json` to a quiz document.
///
/// Built by [`crate::validate::index_entry`], which guarantees a non-blank
/// `title` and a `file` ending in `.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexEntry {
    pub title: String,
    /// Path of the quiz document, relative to the data root.
    pub file: String,
}

impl IndexEntry {
    /// Relative link target for this entry: `file` with `.json` swapped for `.html`.
    pub fn page_href(&self) -> String {
        let stem = self.file.strip_suffix(".json").unwrap_or(&self.file);
        format!("{stem}.html")
    }

    /// Where the rendered page lands under `output_root`.
    ///
    /// Returns `None` for absolute paths or paths that climb out with `..`.
    pub fn page_path(&self, output_root: &Path) -> Option<PathBuf> {
        self.is_contained().then(|| output_root.join(self.page_href()))
    }

    /// Whether `file` stays inside the directory it is resolved against:
    /// relative, with no `..` components.
    pub fn is_contained(&self) -> bool {
        Path::new(&self.file)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }

    /// Number of directories between the output root and this entry's page.
    pub fn depth(&self) -> usize {
        Path::new(&self.file)
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count()
            .saturating_sub(1)
    }
}

/// An [`IndexEntry`] whose quiz document existed and validated at filter time.
///
/// The constructor is crate-private and used by [`crate::filter`], so outside
/// this crate holding a `ValidatedEntry` is proof that both checks passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    entry: IndexEntry,
}

impl ValidatedEntry {
    pub(crate) fn new(entry: IndexEntry) -> Self {
        Self { entry }
    }

    pub fn title(&self) -> &str {
        &self.entry.title
    }

    pub fn file(&self) -> &str {
        &self.entry.file
    }

    pub fn entry(&self) -> &IndexEntry {
        &self.entry
    }
}

/// A quiz document reduced to its renderable parts.
///
/// `questions` holds only questions that passed per-question validation, in
/// document order, and may be empty; the renderer decides what to do then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDocument {
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    /// Valid answers only; malformed answers were dropped.
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub answer: String,
    pub correct: bool,
}
