//! Error types for the todo store.
//!
//! # Design
//! `OutOfRange` gets a dedicated variant because callers map "the id does not
//! address an item" to a different failure than "the file itself is broken."
//! I/O and parse failures keep their underlying error for server-side logs.

use std::fmt;

/// Errors returned by `List` load/save/mutate operations.
#[derive(Debug)]
pub enum StoreError {
    /// The todo file could not be read or written.
    Io(std::io::Error),

    /// The todo file exists but does not contain a valid item array.
    Parse(serde_json::Error),

    /// The id does not address an item in the current list.
    OutOfRange { id: usize, len: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "todo file I/O failed: {err}"),
            StoreError::Parse(err) => write!(f, "malformed todo file: {err}"),
            StoreError::OutOfRange { id, len } => {
                write!(f, "id {id} is out of range for a list of {len}")
            }
        }
    }
}

impl std::error::Error for StoreError {}
