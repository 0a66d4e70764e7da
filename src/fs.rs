//! Filesystem access used by every pipeline stage.
//!
//! The [`Filesystem`] trait is the only way the loader, the existence filter
//! and the renderer touch the disk. The production implementation is
//! [`LocalFs`]; tests swap in an in-memory implementation so every stage can
//! be exercised without a temp directory.
//!
//! Implementations must be `Sync`: the filter and renderer share one
//! filesystem handle across rayon workers.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            FsError::NotFound(path.to_path_buf())
        } else {
            FsError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// The four filesystem primitives the pipeline relies on.
pub trait Filesystem: Sync {
    /// Read a whole file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, FsError>;

    /// Write `contents` to `path` in a single call, replacing any existing file.
    fn write_text(&self, path: &Path, contents: &str) -> Result<(), FsError>;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents. Succeeds if it already exists.
    fn ensure_dir(&self, path: &Path) -> Result<(), FsError>;
}

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn read_text(&self, path: &Path) -> Result<String, FsError> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        std::fs::write(path, contents).map_err(|e| FsError::from_io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), FsError> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }
}
