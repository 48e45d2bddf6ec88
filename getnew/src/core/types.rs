//! Shared types for one `getnew` invocation.
//!
//! Nothing here is persisted; candidates are rebuilt from directory metadata
//! on every run.

use std::borrow::Cow;
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::SystemTime;

/// A regular file eligible for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub file_name: OsString,
    pub modified: SystemTime,
}

impl FileCandidate {
    pub fn new(file_name: impl Into<OsString>, modified: SystemTime) -> Self {
        Self {
            file_name: file_name.into(),
            modified,
        }
    }

    /// File name for display and substring matching.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        self.file_name.to_string_lossy()
    }
}

/// Which file to pick from which directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionQuery {
    pub source_dir: PathBuf,
    /// Case-insensitive substring; `None` keeps every file.
    pub filter: Option<String>,
    /// 1 = newest.
    pub rank: NonZeroUsize,
}

impl SelectionQuery {
    /// Build a query, treating an empty filter as no filter.
    pub fn new(source_dir: impl Into<PathBuf>, filter: Option<String>, rank: NonZeroUsize) -> Self {
        Self {
            source_dir: source_dir.into(),
            filter: filter.filter(|f| !f.is_empty()),
            rank,
        }
    }
}
