//! Side-effecting helpers: directory listing, file moves, and child processes.

pub mod extract;
pub mod listing;
pub mod process;
pub mod relocate;
