//! Shared test utilities for the quiz-site test suite.
//!
//! Provides [`MemoryFs`], an in-memory [`Filesystem`] that records writes and
//! can inject failures, plus small builders for quiz JSON.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fs = MemoryFs::new()
//!     .with_file("data/index.json", &index_json(&[("Quiz A", "a.json")]))
//!     .with_file("data/a.json", &quiz_json("Quiz A", &["What?"]))
//!     .with_failing_write("dist/a.html");
//!
//! assert_eq!(fs.written_paths(), vec!["dist/index.html"]);
//! ```

use crate::fs::{Filesystem, FsError};
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// =========================================================================
// In-memory filesystem
// =========================================================================

/// In-memory filesystem.
/// Uses Mutex (not RefCell) so it is Sync and works with rayon's par_iter.
#[derive(Default)]
pub struct MemoryFs {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    unreadable: BTreeSet<PathBuf>,
    failing_writes: BTreeSet<PathBuf>,
    writes: Mutex<Vec<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, contents: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), contents.to_string());
        self
    }

    /// A file that exists but fails to read with a permission error.
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    /// Writes to `path` fail with a permission error.
    pub fn with_failing_write(mut self, path: &str) -> Self {
        self.failing_writes.insert(PathBuf::from(path));
        self
    }

    /// Contents of a file, if present.
    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    /// Every path successfully written, sorted.
    pub fn written_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .writes
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        paths.sort();
        paths
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.dirs.lock().unwrap().contains(Path::new(path))
    }

    fn permission_denied(path: &Path) -> FsError {
        FsError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        }
    }
}

impl Filesystem for MemoryFs {
    fn read_text(&self, path: &Path) -> Result<String, FsError> {
        if self.unreadable.contains(path) {
            return Err(Self::permission_denied(path));
        }
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        if self.failing_writes.contains(path) {
            return Err(Self::permission_denied(path));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        self.writes.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.unreadable.contains(path)
            || self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().contains(path)
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), FsError> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }
}

// =========================================================================
// JSON builders
// =========================================================================

/// `index.json` contents for `(title, file)` pairs.
pub fn index_json(entries: &[(&str, &str)]) -> String {
    let items: Vec<_> = entries
        .iter()
        .map(|(title, file)| json!({"title": title, "file": file}))
        .collect();
    serde_json::Value::Array(items).to_string()
}

/// A valid quiz document: each question gets one correct and one wrong answer.
pub fn quiz_json(title: &str, questions: &[&str]) -> String {
    let questions: Vec<_> = questions
        .iter()
        .map(|q| {
            json!({
                "question": q,
                "answers": [
                    {"answer": format!("{q} right"), "correct": true},
                    {"answer": format!("{q} wrong"), "correct": false}
                ]
            })
        })
        .collect();
    json!({"title": title, "questions": questions}).to_string()
}
