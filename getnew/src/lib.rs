//! Move the Nth newest file from a source directory into the current directory.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (filtering, recency ranking,
//!   archive recognition). No I/O.
//! - **[`io`]**: Side-effecting operations (directory listing, copy+delete,
//!   spawning archive tools behind [`io::process::ProcessInvoker`]).
//!
//! [`select`] and [`fetch`] coordinate the two to implement the CLI.

pub mod config;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod fetch;
pub mod io;
pub mod logging;
pub mod select;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
