//! Archive recognition and the external command used to unpack each format.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

/// Archive formats the dispatcher knows how to hand off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    /// `.gz` and `.tgz`, assumed to be gzipped tarballs.
    Gzip,
    Tar,
    SevenZip,
}

impl ArchiveKind {
    /// Recognize an archive by its last extension, ignoring case.
    ///
    /// Only the final extension is inspected: `bundle.tar.gz` is [`ArchiveKind::Gzip`].
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "zip" => Some(Self::Zip),
            "gz" | "tgz" => Some(Self::Gzip),
            "tar" => Some(Self::Tar),
            "7z" => Some(Self::SevenZip),
            _ => None,
        }
    }

    /// External program that unpacks this format.
    pub fn program(self) -> &'static str {
        match self {
            Self::Zip => "unzip",
            Self::Gzip | Self::Tar => "tar",
            Self::SevenZip => "7z",
        }
    }

    fn flags(self) -> &'static [&'static str] {
        match self {
            Self::Zip => &[],
            Self::Gzip => &["-xzf"],
            Self::Tar => &["-xf"],
            Self::SevenZip => &["x"],
        }
    }

    /// Command that unpacks `file_name` into the current working directory.
    pub fn command_for(self, file_name: &OsStr) -> ToolCommand {
        let mut args: Vec<OsString> = self.flags().iter().copied().map(OsString::from).collect();
        args.push(file_name.to_os_string());
        ToolCommand {
            program: self.program(),
            args,
        }
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Zip => "zip",
            Self::Gzip => "gzip",
            Self::Tar => "tar",
            Self::SevenZip => "7z",
        };
        f.write_str(label)
    }
}

/// Program and arguments for one external tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: &'static str,
    pub args: Vec<OsString>,
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
