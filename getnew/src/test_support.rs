//! Test-only helpers for building source directories and faking archive tools.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use filetime::{FileTime, set_file_mtime};

use crate::core::archive::ToolCommand;
use crate::io::process::{ProcessInvoker, ToolExit};

/// Fixed reference point so fixture mtimes are deterministic.
pub const BASE_EPOCH_SECS: u64 = 1_700_000_000;

/// Timestamp `offset_secs` after [`BASE_EPOCH_SECS`].
pub fn mtime_at(offset_secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(BASE_EPOCH_SECS + offset_secs)
}

/// Write `contents` to `dir/name` and pin its modification time.
pub fn write_file_at(dir: &Path, name: &str, contents: &[u8], offset_secs: u64) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    set_file_mtime(&path, FileTime::from_system_time(mtime_at(offset_secs)))
        .with_context(|| format!("set mtime {}", path.display()))?;
    Ok(path)
}

/// Source directory with `a.txt` (oldest), `b.log` (newest), `c.txt` (middle).
pub fn mixed_downloads() -> Result<tempfile::TempDir> {
    let dir = tempfile::tempdir().context("tempdir")?;
    write_file_at(dir.path(), "a.txt", b"alpha", 10)?;
    write_file_at(dir.path(), "b.log", b"bravo", 30)?;
    write_file_at(dir.path(), "c.txt", b"charlie", 20)?;
    Ok(dir)
}

/// What a [`RecordingInvoker`] does when invoked.
#[derive(Debug, Clone, Copy)]
pub enum ScriptedExit {
    /// Exit 0, optionally creating a file (relative to the workdir) as if extracted.
    Success { creates: Option<&'static str> },
    /// Exit 0 after deleting the archive (the last argument) from the workdir.
    SuccessConsumingArchive,
    /// Exit with the given nonzero code.
    Code(i32),
    /// Fail to spawn, as if the program were not installed.
    SpawnError,
}

/// [`ProcessInvoker`] fake that records each command and replays a scripted exit.
pub struct RecordingInvoker {
    exit: ScriptedExit,
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl RecordingInvoker {
    pub fn new(exit: ScriptedExit) -> Self {
        Self {
            exit,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Rendered command lines, in call order.
    pub fn invocations(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(cmd, _)| cmd.clone()).collect()
    }

    pub fn workdirs(&self) -> Vec<PathBuf> {
        self.calls.borrow().iter().map(|(_, dir)| dir.clone()).collect()
    }
}

impl ProcessInvoker for RecordingInvoker {
    fn invoke(&self, command: &ToolCommand, workdir: &Path) -> io::Result<ToolExit> {
        self.calls
            .borrow_mut()
            .push((command.to_string(), workdir.to_path_buf()));
        match self.exit {
            ScriptedExit::Success { creates } => {
                if let Some(relative) = creates {
                    let path = workdir.join(relative);
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(path, b"extracted")?;
                }
                Ok(ToolExit::from_code(Some(0)))
            }
            ScriptedExit::SuccessConsumingArchive => {
                if let Some(archive) = command.args.last() {
                    fs::remove_file(workdir.join(archive))?;
                }
                Ok(ToolExit::from_code(Some(0)))
            }
            ScriptedExit::Code(code) => Ok(ToolExit::from_code(Some(code))),
            ScriptedExit::SpawnError => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not installed", command.program),
            )),
        }
    }
}
