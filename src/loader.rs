//! JSON document loading.
//!
//! [`try_load`] keeps the three failure classes apart for diagnostics;
//! [`load`] logs them and collapses every failure to `None`. Callers treat
//! `None` as "unusable", never as an error of their own.

use crate::fs::{Filesystem, FsError};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("JSON syntax error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}

/// Read `path` and parse it as JSON.
pub fn try_load(fs: &impl Filesystem, path: &Path) -> Result<Value, LoadError> {
    debug!(path = %path.display(), "Reading file");
    let text = fs.read_text(path).map_err(|e| match e {
        FsError::NotFound(p) => LoadError::NotFound(p),
        other => LoadError::Read {
            path: path.to_path_buf(),
            source: other,
        },
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`try_load`], but logs the failure and returns `None`.
pub fn load(fs: &impl Filesystem, path: &Path) -> Option<Value> {
    match try_load(fs, path) {
        Ok(value) => Some(value),
        Err(err) => {
            error!(error = %err, "Could not load document");
            None
        }
    }
}
