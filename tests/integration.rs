use dirpeek::{DirpeekBuilder, Entry, Node, Snapshot, dirpeek, output};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn integration_scan_and_render() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "line1\nline2").unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("b/c.txt"), "hello").unwrap();

    let options = DirpeekBuilder::new(dir.path()).sorted(true).build();
    let snapshot = dirpeek(options).unwrap();
    let lines = output::render(&snapshot);

    assert_eq!(
        lines,
        vec![
            "a.txt",
            "  Contents:",
            "    line1",
            "    line2",
            "b",
            "  c.txt",
            "    Contents:",
            "      hello",
        ]
    );
}

#[test]
fn integration_preview_caps_at_five_lines() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("long.txt"),
        "l1\nl2\nl3\nl4\nl5\nl6\nl7",
    )
    .unwrap();

    let options = DirpeekBuilder::new(dir.path()).build();
    let snapshot = dirpeek(options).unwrap();
    let lines = output::render(&snapshot);

    assert_eq!(
        lines,
        vec![
            "long.txt",
            "  Contents:",
            "    l1",
            "    l2",
            "    l3",
            "    l4",
            "    l5",
            "    ... (truncated)",
        ]
    );
}

#[test]
fn integration_empty_file_renders_name_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();

    let options = DirpeekBuilder::new(dir.path()).build();
    let snapshot = dirpeek(options).unwrap();

    assert_eq!(output::render(&snapshot), vec!["empty.txt"]);
}

#[test]
fn integration_sentinels_render_as_leaf_content() {
    let snapshot = Snapshot {
        root: PathBuf::from("/x"),
        tree: Node::Directory(vec![
            Entry {
                name: "secret".to_string(),
                node: Node::Denied,
            },
            Entry {
                name: "blob.bin".to_string(),
                node: Node::Unreadable {
                    path: PathBuf::from("/x/blob.bin"),
                },
            },
            Entry {
                name: "flaky".to_string(),
                node: Node::Failed {
                    message: "device not ready".to_string(),
                },
            },
        ]),
    };

    assert_eq!(
        output::render(&snapshot),
        vec![
            "secret",
            "  Contents:",
            "    [Permission denied]",
            "blob.bin",
            "  Contents:",
            "    [Unreadable file: /x/blob.bin]",
            "flaky",
            "  Contents:",
            "    [Error exploring directory: device not ready]",
        ]
    );
}

#[test]
fn integration_render_to_string_is_newline_terminated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("f.txt"), "x").unwrap();

    let options = DirpeekBuilder::new(dir.path()).build();
    let snapshot = dirpeek(options).unwrap();
    let text = output::render_to_string(&snapshot);

    assert_eq!(text, "f.txt\n  Contents:\n    x\n");
}

#[test]
fn integration_empty_root_renders_nothing() {
    let dir = tempdir().unwrap();

    let options = DirpeekBuilder::new(dir.path()).build();
    let snapshot = dirpeek(options).unwrap();

    assert!(output::render(&snapshot).is_empty());
    assert_eq!(output::render_to_string(&snapshot), "");
}
