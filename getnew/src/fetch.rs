//! Orchestration for one `getnew` invocation: select, move, and optionally
//! unarchive.

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::GetnewConfig;
use crate::error::GetnewError;
use crate::io::extract::{Extracted, try_extract};
use crate::io::process::ProcessInvoker;
use crate::io::relocate::relocate;
use crate::select::select_from_dir;

/// A file that now lives in the destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moved {
    pub file_name: OsString,
    pub dest_path: PathBuf,
}

/// Select the configured candidate and move it into `config.dest_dir`.
pub fn move_selected(config: &GetnewConfig) -> Result<Moved, GetnewError> {
    let candidate = select_from_dir(&config.query)?;
    let dest_path = relocate(&config.query.source_dir, &config.dest_dir, &candidate)?;
    Ok(Moved {
        file_name: candidate.file_name,
        dest_path,
    })
}

/// Run the archive dispatcher over `config.dest_dir`.
///
/// The dispatcher extracts the first archive it finds, which may not be the
/// file that was just moved; that case is logged as a warning.
pub fn unarchive<P: ProcessInvoker>(
    config: &GetnewConfig,
    invoker: &P,
    moved: &Moved,
) -> Result<Extracted, GetnewError> {
    let extracted = try_extract(&config.dest_dir, invoker)?;
    if extracted.archive != moved.file_name {
        warn!(
            moved = %moved.file_name.to_string_lossy(),
            extracted = %extracted.archive.to_string_lossy(),
            "extracted an archive other than the file just moved"
        );
    }
    info!(archive = %extracted.archive.to_string_lossy(), kind = %extracted.kind, "unarchived");
    Ok(extracted)
}
