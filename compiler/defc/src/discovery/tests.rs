#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use super::*;
use pretty_assertions::assert_eq;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}

#[test]
fn finds_both_kinds_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "enum/Color.the");
    touch(root, "bit/net/Header.btx");
    touch(root, "bit/Flags.btx");
    touch(root, "bit/Flags.h");
    touch(root, "README.md");

    let found = discover_definitions(root);
    assert_eq!(
        found,
        vec![
            root.join("bit/Flags.btx"),
            root.join("bit/net/Header.btx"),
            root.join("enum/Color.the"),
        ]
    );
}

#[test]
fn skips_hidden_and_target_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, ".cache/Old.btx");
    touch(root, "target/Gen.the");
    touch(root, "bit/Real.btx");

    assert_eq!(discover_definitions(root), vec![root.join("bit/Real.btx")]);
}

#[test]
fn single_file() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "Color.the");
    touch(dir.path(), "notes.txt");

    let file = dir.path().join("Color.the");
    assert_eq!(discover_definitions(&file), vec![file.clone()]);
    assert!(discover_definitions(&dir.path().join("notes.txt")).is_empty());
}

#[test]
fn missing_path() {
    assert!(discover_definitions(Path::new("/nonexistent/defs")).is_empty());
}
