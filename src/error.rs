use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the scan entry point.
///
/// Everything that fails below a valid root is recovered in place and encoded
/// as a sentinel node in the snapshot, so the only top-level failure is an
/// invalid root.
#[derive(Debug, Error)]
pub enum DirpeekError {
    #[error("{0} is not a valid directory")]
    NotADirectory(PathBuf),
}
