use crate::error::DirpeekError;
use crate::options::{CONTENT_LIMIT, DirpeekOptions};
use crate::types::{Entry, Node, Snapshot};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Marker appended to content cut at [`CONTENT_LIMIT`].
pub const TRUNCATION_MARKER: &str = "\n... [File truncated]";

fn is_ignored(path: &Path, patterns: &[String]) -> bool {
    let full = path.to_string_lossy();
    patterns.iter().any(|pattern| full.contains(pattern.as_str()))
}

/// Caps `content` at [`CONTENT_LIMIT`] characters, appending the marker.
///
/// The cut is on character count, not bytes, so multi-byte content is never
/// split inside a code point.
fn truncate_content(mut content: String) -> (String, bool) {
    match content.char_indices().nth(CONTENT_LIMIT) {
        Some((byte_index, _)) => {
            content.truncate(byte_index);
            content.push_str(TRUNCATION_MARKER);
            (content, true)
        }
        None => (content, false),
    }
}

fn read_file(path: &Path) -> Node {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Unreadable file {}: {}", path.display(), _e);
            return Node::Unreadable {
                path: path.to_path_buf(),
            };
        }
    };
    match String::from_utf8(bytes) {
        Ok(text) => {
            let (content, truncated) = truncate_content(text);
            Node::File { content, truncated }
        }
        Err(_) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Non-UTF-8 file {}", path.display());
            Node::Unreadable {
                path: path.to_path_buf(),
            }
        }
    }
}

fn listing_failure(_path: &Path, error: std::io::Error) -> Node {
    #[cfg(feature = "logging")]
    tracing::debug!("Failed to list {}: {}", _path.display(), error);
    if error.kind() == ErrorKind::PermissionDenied {
        Node::Denied
    } else {
        Node::Failed {
            message: error.to_string(),
        }
    }
}

fn scan_dir(path: &Path, depth: usize, options: &DirpeekOptions) -> Node {
    if options.max_depth.is_some_and(|max| depth > max) {
        return Node::Directory(Vec::new());
    }
    let listing = match fs::read_dir(path) {
        Ok(listing) => listing,
        Err(e) => return listing_failure(path, e),
    };
    let mut entries = Vec::new();
    for item in listing {
        // A failure mid-listing poisons the whole directory, not one entry.
        let item = match item {
            Ok(item) => item,
            Err(e) => return listing_failure(path, e),
        };
        let full_path = item.path();
        if is_ignored(&full_path, &options.ignore_patterns) {
            continue;
        }
        let name = item.file_name().to_string_lossy().into_owned();
        // is_dir follows symlinks, matching the host API's view of the entry.
        let node = if full_path.is_dir() {
            scan_dir(&full_path, depth + 1, options)
        } else {
            read_file(&full_path)
        };
        entries.push(Entry { name, node });
    }
    if options.sorted {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Node::Directory(entries)
}

/// Walks `options.root` and captures the tree in memory.
///
/// Filesystem failures below the root never abort the scan: a directory that
/// cannot be listed becomes a [`Node::Denied`] or [`Node::Failed`] subtree, a
/// file that cannot be read or decoded becomes [`Node::Unreadable`], and
/// siblings continue to be scanned.
///
/// # Errors
///
/// Returns [`DirpeekError::NotADirectory`] when the root is not an existing
/// directory.
pub fn dirpeek(options: DirpeekOptions) -> Result<Snapshot, DirpeekError> {
    if !options.root.is_dir() {
        return Err(DirpeekError::NotADirectory(options.root));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Starting dirpeek with root: {}", options.root.display());
    let tree = scan_dir(&options.root, 0, &options);
    Ok(Snapshot {
        root: options.root,
        tree,
    })
}
