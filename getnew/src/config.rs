//! Invocation configuration assembled from flags and the environment.
//!
//! Built once in `main` and passed explicitly to the selector, relocator, and
//! archive dispatcher.

use std::env;
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::types::SelectionQuery;

/// Environment variable naming the source directory when `--source` is absent.
pub const SOURCE_DIR_ENV: &str = "GETNEW_SOURCE_DIR";

/// Fallback source directory, relative to the user's home.
pub const DEFAULT_SOURCE_SUBDIR: &str = "Downloads";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetnewConfig {
    pub query: SelectionQuery,
    /// Where the selected file is moved; the current directory for the CLI.
    pub dest_dir: PathBuf,
    /// Run the archive dispatcher after a successful move.
    pub unarchive: bool,
}

impl GetnewConfig {
    /// Resolve the configuration for this process: source directory from the
    /// flag, then [`SOURCE_DIR_ENV`], then `~/Downloads`; destination is the
    /// current directory.
    pub fn load(
        source: Option<PathBuf>,
        filter: Option<String>,
        rank: NonZeroUsize,
        unarchive: bool,
    ) -> Result<Self> {
        let source_dir = resolve_source_dir(source, env::var_os(SOURCE_DIR_ENV), dirs::home_dir())?;
        let dest_dir = env::current_dir().context("resolve current directory")?;
        let config = Self {
            query: SelectionQuery::new(source_dir, filter, rank),
            dest_dir,
            unarchive,
        };
        debug!(?config, "resolved config");
        Ok(config)
    }
}

/// Pick the source directory: explicit flag, then environment value, then
/// `<home>/Downloads`. Empty values count as unset.
pub fn resolve_source_dir(
    flag: Option<PathBuf>,
    env_value: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = flag.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(dir);
    }
    if let Some(dir) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    home.filter(|p| !p.as_os_str().is_empty())
        .map(|home| home.join(DEFAULT_SOURCE_SUBDIR))
        .ok_or_else(|| {
            anyhow!("cannot determine source directory: set {SOURCE_DIR_ENV} or pass --source")
        })
}
