use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single node in the snapshot tree.
///
/// The set of variants is closed: the renderer dispatches exhaustively and
/// never has to recover from an unknown node kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A directory, as an ordered-by-discovery list of named children.
    Directory(Vec<Entry>),
    /// A text file's content, possibly cut to the content limit.
    ///
    /// When `truncated` is set, `content` ends with the
    /// `"\n... [File truncated]"` marker.
    File { content: String, truncated: bool },
    /// A file that could not be read or decoded as UTF-8.
    ///
    /// The attempted path is kept for diagnostics.
    Unreadable { path: PathBuf },
    /// A directory whose listing failed with a permission error.
    Denied,
    /// A directory whose listing failed for any other reason.
    Failed { message: String },
}

impl Node {
    /// Returns true for an empty `Directory` node.
    pub fn is_empty_dir(&self) -> bool {
        matches!(self, Node::Directory(entries) if entries.is_empty())
    }
}

/// One named child of a directory.
///
/// The name is the entry's file name as observed at scan time; each entry
/// corresponds to exactly one filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub node: Node,
}

/// The complete in-memory tree captured from one scan of a root path.
///
/// Built in a single pass and never mutated afterwards. `tree` is a
/// [`Node::Directory`] unless listing the root itself failed, in which case
/// it holds the failure sentinel directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The scanned root path.
    pub root: PathBuf,
    /// The tree rooted at `root`.
    pub tree: Node,
}
