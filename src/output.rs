//! Rendering snapshots as indented text.
//!
//! Produces the human-readable listing: entry names indented by depth, with a
//! short content preview under each file. Rendering is total; every node kind
//! has a fixed textual form.

use crate::types::{Entry, Node, Snapshot};
use std::borrow::Cow;

/// Lines of content shown under a file before the preview is cut.
pub const PREVIEW_LINES: usize = 5;

/// One indent unit.
const INDENT: &str = "  ";

/// Renders a snapshot as a sequence of printable lines.
pub fn render(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = Vec::new();
    match &snapshot.tree {
        Node::Directory(entries) => render_entries(entries, 0, &mut lines),
        leaf => render_preview(&leaf_text(leaf), 0, &mut lines),
    }
    lines
}

/// Renders a snapshot as one string, newline-terminated when non-empty.
pub fn render_to_string(snapshot: &Snapshot) -> String {
    let lines = render(snapshot);
    if lines.is_empty() {
        String::new()
    } else {
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn render_entries(entries: &[Entry], indent: usize, lines: &mut Vec<String>) {
    for entry in entries {
        lines.push(format!("{}{}", INDENT.repeat(indent), entry.name));
        match &entry.node {
            Node::Directory(children) => render_entries(children, indent + 1, lines),
            leaf => render_preview(&leaf_text(leaf), indent + 1, lines),
        }
    }
}

/// The leaf's textual form: file content, or the sentinel for a failure.
fn leaf_text(node: &Node) -> Cow<'_, str> {
    match node {
        Node::File { content, .. } => Cow::Borrowed(content.as_str()),
        Node::Unreadable { path } => {
            Cow::Owned(format!("[Unreadable file: {}]", path.display()))
        }
        Node::Denied => Cow::Borrowed("[Permission denied]"),
        Node::Failed { message } => {
            Cow::Owned(format!("[Error exploring directory: {message}]"))
        }
        Node::Directory(_) => unreachable!("directories render as entries"),
    }
}

/// Emits at most the first [`PREVIEW_LINES`] lines of `text` under a
/// `Contents:` marker. Empty text emits nothing at all.
fn render_preview(text: &str, indent: usize, lines: &mut Vec<String>) {
    if text.is_empty() {
        return;
    }
    lines.push(format!("{}Contents:", INDENT.repeat(indent)));
    let pad = INDENT.repeat(indent + 1);
    let content_lines: Vec<&str> = text.split('\n').collect();
    for line in content_lines.iter().take(PREVIEW_LINES) {
        lines.push(format!("{pad}{line}"));
    }
    if content_lines.len() > PREVIEW_LINES {
        lines.push(format!("{pad}... (truncated)"));
    }
}
