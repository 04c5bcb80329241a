use std::fs;
use std::path::Path;

use gonode_compiler::{Event, NullReporter};

use crate::discovery::discover;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "package main\n").unwrap();
}

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn relative(root: &Path, files: &[std::path::PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn matches_sorted_within_pattern() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "go/b.go");
    touch(dir.path(), "go/a.go");
    touch(dir.path(), "go/readme.md");

    let files = discover(dir.path(), &patterns(&["go/*.go"]), &mut NullReporter).unwrap();
    assert_eq!(relative(dir.path(), &files), ["go/a.go", "go/b.go"]);
}

#[test]
fn pattern_order_kept_and_duplicates_dropped() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "lib/util.go");
    touch(dir.path(), "main.go");

    let files = discover(
        dir.path(),
        &patterns(&["main.go", "**/*.go"]),
        &mut NullReporter,
    )
    .unwrap();
    assert_eq!(relative(dir.path(), &files), ["main.go", "lib/util.go"]);
}

#[test]
fn directories_not_matched() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("pkg.go")).unwrap();
    touch(dir.path(), "real.go");

    let files = discover(dir.path(), &patterns(&["*.go"]), &mut NullReporter).unwrap();
    assert_eq!(relative(dir.path(), &files), ["real.go"]);
}

#[test]
fn non_go_matches_skipped() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "go/main.go");
    touch(dir.path(), "go/README.md");
    touch(dir.path(), "go/Makefile");
    touch(dir.path(), "go/upper.GO");

    let files = discover(dir.path(), &patterns(&["go/*"]), &mut NullReporter).unwrap();
    assert_eq!(relative(dir.path(), &files), ["go/main.go", "go/upper.GO"]);
}

#[test]
fn pattern_with_only_non_go_matches_reported() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "docs/guide.md");
    let mut events: Vec<Event> = Vec::new();

    let files = discover(dir.path(), &patterns(&["docs/*"]), &mut events).unwrap();

    assert!(files.is_empty());
    assert_eq!(
        events,
        vec![Event::PatternUnmatched {
            pattern: "docs/*".to_string()
        }]
    );
}

#[test]
fn unmatched_pattern_reported() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "main.go");
    let mut events: Vec<Event> = Vec::new();

    let files = discover(dir.path(), &patterns(&["*.go", "vendor/*.go"]), &mut events).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(
        events,
        vec![Event::PatternUnmatched {
            pattern: "vendor/*.go".to_string()
        }]
    );
}

#[test]
fn invalid_pattern_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = discover(dir.path(), &patterns(&["go/***.go"]), &mut NullReporter).unwrap_err();
    assert_eq!(err.pattern, "go/***.go");
}
