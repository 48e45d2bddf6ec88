//! Deterministic, pure logic shared by the selector and the archive dispatcher.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! candidate lists and file names and return deterministic outputs suitable
//! for tests.

pub mod archive;
pub mod selector;
pub mod types;
