//! Archive dispatcher: find the first recognized archive in a directory,
//! unpack it with an external tool, and delete it on success.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::core::archive::ArchiveKind;
use crate::error::{ExtractionFailure, GetnewError};
use crate::io::process::ProcessInvoker;

/// An archive that was unpacked and removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub archive: OsString,
    pub kind: ArchiveKind,
}

/// Unpack the first archive found among the direct entries of `dir`.
///
/// Entries are visited in enumeration order and the first regular file with a
/// recognized extension wins, whether or not it is the file that was just
/// moved. The archive is only deleted after the tool exits successfully.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn try_extract<P: ProcessInvoker>(dir: &Path, invoker: &P) -> Result<Extracted, GetnewError> {
    let (archive, kind) = find_archive(dir)?.ok_or_else(|| GetnewError::NoArchiveFound {
        dir: dir.to_path_buf(),
    })?;
    let archive_path = dir.join(&archive);
    let fail = |source: ExtractionFailure| GetnewError::Extraction {
        archive: archive_path.clone(),
        source,
    };

    let command = kind.command_for(&archive);
    debug!(%command, %kind, "extracting archive");
    let exit = invoker.invoke(&command, dir).map_err(|source| {
        fail(ExtractionFailure::Spawn {
            program: command.program,
            source,
        })
    })?;
    if !exit.success() {
        warn!(exit_code = ?exit.code(), program = command.program, "extraction failed");
        return Err(fail(ExtractionFailure::Status {
            program: command.program,
            exit,
        }));
    }

    fs::remove_file(&archive_path).map_err(|e| fail(ExtractionFailure::Remove(e)))?;
    info!(archive = %archive_path.display(), "removed extracted archive");
    Ok(Extracted { archive, kind })
}

fn find_archive(dir: &Path) -> Result<Option<(OsString, ArchiveKind)>, GetnewError> {
    let read_error = |source: io::Error| GetnewError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let Some(kind) = ArchiveKind::from_path(Path::new(&entry.file_name())) else {
            continue;
        };
        match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => continue,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(entry = %entry.path().display(), "skipping dangling entry");
                continue;
            }
            Err(e) => return Err(read_error(e)),
        }
        return Ok(Some((entry.file_name(), kind)));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingInvoker, ScriptedExit};

    #[test]
    fn unzips_archive_and_removes_it() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("archive.zip"), b"PK").expect("write");
        fs::write(temp.path().join("notes.txt"), b"notes").expect("write");
        let invoker = RecordingInvoker::new(ScriptedExit::Success {
            creates: Some("archive/readme.txt"),
        });

        let extracted = try_extract(temp.path(), &invoker).expect("extract");

        assert_eq!(extracted.archive, "archive.zip");
        assert_eq!(extracted.kind, ArchiveKind::Zip);
        assert_eq!(invoker.invocations(), vec!["unzip archive.zip".to_string()]);
        assert_eq!(invoker.workdirs(), vec![temp.path().to_path_buf()]);
        assert!(!temp.path().join("archive.zip").exists());
        assert!(temp.path().join("archive").join("readme.txt").exists());
        assert!(temp.path().join("notes.txt").exists());
    }

    #[test]
    fn picks_tar_command_for_uppercase_tgz() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("SRC.TGZ"), b"tgz").expect("write");
        let invoker = RecordingInvoker::new(ScriptedExit::Success { creates: None });

        try_extract(temp.path(), &invoker).expect("extract");

        assert_eq!(invoker.invocations(), vec!["tar -xzf SRC.TGZ".to_string()]);
    }

    #[test]
    fn nonzero_exit_keeps_archive() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("fonts.7z"), b"7z").expect("write");
        let invoker = RecordingInvoker::new(ScriptedExit::Code(2));

        let err = try_extract(temp.path(), &invoker).unwrap_err();

        assert!(matches!(
            err,
            GetnewError::Extraction {
                source: ExtractionFailure::Status { program: "7z", .. },
                ..
            }
        ));
        assert!(temp.path().join("fonts.7z").exists());
    }

    #[test]
    fn spawn_failure_keeps_archive() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("backup.tar"), b"tar").expect("write");
        let invoker = RecordingInvoker::new(ScriptedExit::SpawnError);

        let err = try_extract(temp.path(), &invoker).unwrap_err();

        assert!(matches!(
            err,
            GetnewError::Extraction {
                source: ExtractionFailure::Spawn { program: "tar", .. },
                ..
            }
        ));
        assert!(temp.path().join("backup.tar").exists());
    }

    #[test]
    fn no_archive_found_deletes_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("notes.txt"), b"notes").expect("write");
        fs::write(temp.path().join("photo.jpg"), b"jpg").expect("write");
        let invoker = RecordingInvoker::new(ScriptedExit::Success { creates: None });

        let err = try_extract(temp.path(), &invoker).unwrap_err();

        assert!(matches!(err, GetnewError::NoArchiveFound { .. }));
        assert!(invoker.invocations().is_empty());
        assert!(temp.path().join("notes.txt").exists());
        assert!(temp.path().join("photo.jpg").exists());
    }

    #[test]
    fn archive_removed_by_the_tool_is_a_remove_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("photos.zip"), b"PK").expect("write");
        let invoker = RecordingInvoker::new(ScriptedExit::SuccessConsumingArchive);

        let err = try_extract(temp.path(), &invoker).unwrap_err();

        assert!(matches!(
            err,
            GetnewError::Extraction {
                source: ExtractionFailure::Remove(_),
                ..
            }
        ));
        assert_eq!(invoker.invocations(), vec!["unzip photos.zip".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_archive_symlink_is_skipped() {
        let temp = tempfile::tempdir().expect("tempdir");
        std::os::unix::fs::symlink(temp.path().join("gone.zip"), temp.path().join("link.zip"))
            .expect("symlink");
        fs::write(temp.path().join("backup.tar"), b"tar").expect("write");
        let invoker = RecordingInvoker::new(ScriptedExit::Success { creates: None });

        let extracted = try_extract(temp.path(), &invoker).expect("extract");

        assert_eq!(extracted.archive, "backup.tar");
        assert_eq!(invoker.invocations(), vec!["tar -xf backup.tar".to_string()]);
    }

    #[test]
    fn directories_named_like_archives_are_skipped() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("unpacked.zip")).expect("mkdir");
        let invoker = RecordingInvoker::new(ScriptedExit::Success { creates: None });

        let err = try_extract(temp.path(), &invoker).unwrap_err();

        assert!(matches!(err, GetnewError::NoArchiveFound { .. }));
        assert!(temp.path().join("unpacked.zip").is_dir());
    }
}
