//! Copy-then-delete relocation of the selected file.
//!
//! Bytes are copied rather than renamed so the source directory may live on a
//! different filesystem. A failed copy leaves whatever was written at the
//! destination in place; there is no rollback.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::core::types::FileCandidate;
use crate::error::{GetnewError, RelocateStep};

/// Move `candidate` from `source_dir` into `dest_dir`, overwriting any file of
/// the same name. Returns the destination path.
#[instrument(skip_all, fields(file = %candidate.name_lossy()))]
pub fn relocate(
    source_dir: &Path,
    dest_dir: &Path,
    candidate: &FileCandidate,
) -> Result<PathBuf, GetnewError> {
    let source_path = source_dir.join(&candidate.file_name);
    let dest_path = dest_dir.join(&candidate.file_name);
    let fail = |step: RelocateStep, path: &Path| {
        let path = path.to_path_buf();
        move |source: io::Error| GetnewError::Relocation { step, path, source }
    };

    if is_same_file(&source_path, &dest_path)
        .map_err(fail(RelocateStep::VerifyDestination, &dest_path))?
    {
        return Err(GetnewError::Relocation {
            step: RelocateStep::VerifyDestination,
            path: dest_path,
            source: io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination is the source file",
            ),
        });
    }

    {
        let mut source =
            File::open(&source_path).map_err(fail(RelocateStep::OpenSource, &source_path))?;
        let mut dest =
            File::create(&dest_path).map_err(fail(RelocateStep::CreateDestination, &dest_path))?;
        let copied =
            io::copy(&mut source, &mut dest).map_err(fail(RelocateStep::Copy, &dest_path))?;
        dest.sync_all()
            .map_err(fail(RelocateStep::FlushDestination, &dest_path))?;
        debug!(bytes = copied, dest = %dest_path.display(), "copied file");
    }

    fs::remove_file(&source_path).map_err(fail(RelocateStep::RemoveOriginal, &source_path))?;
    info!(from = %source_path.display(), to = %dest_path.display(), "moved file");
    Ok(dest_path)
}

/// True if both paths resolve to the same existing file. A missing source is
/// left for the open step to report.
fn is_same_file(a: &Path, b: &Path) -> io::Result<bool> {
    if !b.exists() {
        return Ok(false);
    }
    let source = match fs::canonicalize(a) {
        Ok(path) => path,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    Ok(source == fs::canonicalize(b)?)
}
