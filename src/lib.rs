//! # Dirpeek
//!
//! `dirpeek` is a library for recursively walking a directory tree into an
//! in-memory snapshot, capturing each file's (truncated) text content, and
//! rendering the snapshot as an indented listing.
//!
//! The walk is single-threaded and fully synchronous. Failures below the root
//! never abort a scan: a directory that cannot be listed becomes a sentinel
//! node, a file that cannot be read or decoded as UTF-8 becomes an
//! [`Node::Unreadable`] node, and sibling entries continue to be scanned.
//!
//! Entries whose full path contains any configured ignore substring are
//! skipped entirely; the default set is [`DEFAULT_IGNORE_PATTERNS`].
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirpeek::{DirpeekBuilder, dirpeek, output};
//!
//! let options = DirpeekBuilder::new(".")
//!     .max_depth(2)
//!     .sorted(true)
//!     .build();
//!
//! let snapshot = dirpeek(options).expect("Failed to scan directory");
//! print!("{}", output::render_to_string(&snapshot));
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{TRUNCATION_MARKER, dirpeek};
pub use error::DirpeekError;
pub use options::{CONTENT_LIMIT, DEFAULT_IGNORE_PATTERNS, DirpeekBuilder, DirpeekOptions};
pub use types::{Entry, Node, Snapshot};
