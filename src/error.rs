//! Error taxonomy for ambient (non-core) concerns — spec §7.
//!
//! The routing core itself never returns a `Result`: query-invalid inputs,
//! infeasibility, and resource failure all collapse into `found = false` /
//! an empty [`crate::query::Routes`] per spec §7, matching the teacher
//! crate's own preference for `Option` over a dedicated error type
//! (`Contact::try_new`, `ContactManager::dry_run_tx`, ...). The only place
//! this crate needs a real error type is the textual-format loader, which
//! can fail to open a file — a concern the core itself has none of.

use std::fmt;

/// Failure to load a contact set from the textual exchange format (spec
/// §6). Malformed individual lines are not an error — they are silently
/// skipped, per `original_source/cgr/src/csv.c`'s own policy, carried
/// forward unchanged.
#[derive(Debug)]
pub enum LoadError {
    /// The path could not be opened for reading.
    Io(std::io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read contact plan: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}
