//! Process invoker for external archive tools.
//!
//! The [`ProcessInvoker`] trait decouples the archive dispatcher from actually
//! spawning `unzip`, `tar`, or `7z`. Tests use a recording invoker that returns
//! scripted exits without spawning processes.

use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, error, instrument};

use crate::core::archive::ToolCommand;

/// Outcome of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolExit {
    code: Option<i32>,
}

impl ToolExit {
    /// `None` means the process was terminated without an exit code (e.g. by a signal).
    pub fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ToolExit {
    fn from(status: ExitStatus) -> Self {
        Self::from_code(status.code())
    }
}

impl fmt::Display for ToolExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => f.write_str("no exit code (terminated by signal)"),
        }
    }
}

/// Abstraction over running an external command to completion.
pub trait ProcessInvoker {
    /// Run `command` in `workdir` and wait for it. Spawn failures are returned as `Err`.
    fn invoke(&self, command: &ToolCommand, workdir: &Path) -> io::Result<ToolExit>;
}

/// Invoker that spawns the real program with inherited stdout/stderr, so the
/// tool's own progress output reaches the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct InheritedInvoker;

impl ProcessInvoker for InheritedInvoker {
    #[instrument(skip_all, fields(program = command.program, workdir = %workdir.display()))]
    fn invoke(&self, command: &ToolCommand, workdir: &Path) -> io::Result<ToolExit> {
        debug!(%command, "spawning child process");
        let status = Command::new(command.program)
            .args(&command.args)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .inspect_err(|e| error!(err = %e, "failed to spawn command"))?;

        let exit = ToolExit::from(status);
        debug!(exit_code = ?exit.code(), "command finished");
        Ok(exit)
    }
}
