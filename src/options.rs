use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The canonical default ignore set.
///
/// Any entry whose full path contains one of these substrings is skipped
/// entirely. This is the documented superset including editor directories.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 5] =
    [".git", "__pycache__", ".DS_Store", ".idea", ".vscode"];

/// The character budget for captured file content.
///
/// Content longer than this is cut and marked; content of exactly this length
/// is stored verbatim.
pub const CONTENT_LIMIT: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirpeekOptions {
    pub root: PathBuf,
    /// Directory levels below the root to descend; `None` is unbounded.
    /// Depth 0 means the root's immediate children only.
    pub max_depth: Option<usize>,
    /// Substrings matched against each entry's full path.
    pub ignore_patterns: Vec<String>,
    /// Sort entries by name within each directory. Off by default: discovery
    /// order follows whatever the host listing reports.
    pub sorted: bool,
}
impl Default for DirpeekOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_depth: None,
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            sorted: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct DirpeekBuilder {
    options: DirpeekOptions,
}
impl DirpeekBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DirpeekOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    /// Replaces the default ignore set entirely.
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    /// Adds patterns on top of the current set.
    pub fn extra_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns.extend(patterns);
        self
    }
    pub fn sorted(mut self, yes: bool) -> Self {
        self.options.sorted = yes;
        self
    }
    pub fn build(self) -> DirpeekOptions {
        self.options
    }
}
