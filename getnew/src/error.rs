//! Error taxonomy for selection, relocation, and extraction.
//!
//! Every variant is terminal for the current invocation. The binary prints the
//! full source chain and exits with [`crate::exit_codes::FAILURE`].

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::io::process::ToolExit;

#[derive(Debug, Error)]
pub enum GetnewError {
    #[error("failed to read directory {}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No candidates survived listing and filtering.
    #[error("{}", not_found_message(.filter.as_deref()))]
    NotFound { filter: Option<String> },

    /// Requested rank exceeds the number of candidates.
    #[error("requested rank {rank} but only {available} files available")]
    OutOfRange { rank: usize, available: usize },

    #[error("failed to {step} {}", .path.display())]
    Relocation {
        step: RelocateStep,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to unarchive {}", .archive.display())]
    Extraction {
        archive: PathBuf,
        #[source]
        source: ExtractionFailure,
    },

    #[error("no recognized archive file found in {}", .dir.display())]
    NoArchiveFound { dir: PathBuf },
}

fn not_found_message(filter: Option<&str>) -> String {
    match filter {
        Some(filter) => format!("no files matching '{filter}' found in the source directory"),
        None => "no files found in the source directory".to_string(),
    }
}

/// Step of a relocation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocateStep {
    VerifyDestination,
    OpenSource,
    CreateDestination,
    Copy,
    FlushDestination,
    RemoveOriginal,
}

impl fmt::Display for RelocateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RelocateStep::VerifyDestination => "verify destination",
            RelocateStep::OpenSource => "open source file",
            RelocateStep::CreateDestination => "create destination file",
            RelocateStep::Copy => "copy",
            RelocateStep::FlushDestination => "flush destination file",
            RelocateStep::RemoveOriginal => "remove original file",
        };
        f.write_str(label)
    }
}

/// Cause of an [`GetnewError::Extraction`].
#[derive(Debug, Error)]
pub enum ExtractionFailure {
    #[error("could not run {program}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{program} failed with {exit}")]
    Status {
        program: &'static str,
        exit: ToolExit,
    },

    #[error("could not remove archive after extraction")]
    Remove(#[source] io::Error),
}
