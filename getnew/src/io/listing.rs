//! Directory enumeration into selection candidates.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, instrument};

use crate::core::types::FileCandidate;
use crate::error::GetnewError;

/// List the regular files directly inside `dir`, in enumeration order.
///
/// Directories are skipped. Symlinks are followed, so a link to a regular file
/// counts as a candidate and a link to a directory does not. Entries that vanish
/// before they can be inspected, including dangling symlinks, are skipped.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn list_candidates(dir: &Path) -> Result<Vec<FileCandidate>, GetnewError> {
    let read_error = |source: io::Error| GetnewError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(entry = %entry.path().display(), "skipping dangling entry");
                continue;
            }
            Err(e) => return Err(read_error(e)),
        };
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().map_err(read_error)?;
        candidates.push(FileCandidate::new(entry.file_name(), modified));
    }

    debug!(count = candidates.len(), "listed candidates");
    Ok(candidates)
}
