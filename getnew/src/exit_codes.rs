//! Stable exit codes for the `getnew` CLI.

/// File moved (and unarchived, if requested).
pub const OK: i32 = 0;
/// Any reported error: bad arguments, selection, relocation, or extraction.
pub const FAILURE: i32 = 1;
