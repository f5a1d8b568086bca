//! Hygiene: source-level standards checked at test time.
//!
//! Scans production `.rs` files under `src/` (sibling `*_test.rs` files are
//! exempt) for patterns that crash the page or silently drop errors. Every
//! budget is zero; browser glue logs and degrades instead.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Files containing `pattern`, with the number of offending lines.
fn hits(pattern: &str) -> Vec<(String, usize)> {
    source_files()
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path, count))
        })
        .collect()
}

fn assert_within(pattern: &str, budget: usize) {
    let found = hits(pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= budget, "`{pattern}` budget exceeded: found {count}, max {budget}.\n{listing}");
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

// =============================================================
// Panics
// =============================================================

#[test]
fn no_unwrap() {
    assert_within(".unwrap()", 0);
}

#[test]
fn no_expect() {
    assert_within(".expect(", 0);
}

#[test]
fn no_panic() {
    assert_within("panic!(", 0);
}

#[test]
fn no_unreachable() {
    assert_within("unreachable!(", 0);
}

#[test]
fn no_todo_or_unimplemented() {
    assert_within("todo!(", 0);
    assert_within("unimplemented!(", 0);
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn no_silent_discard() {
    assert_within("let _ =", 0);
}

#[test]
fn no_dot_ok() {
    assert_within(".ok()", 0);
}

#[test]
fn no_dead_code_allowances() {
    assert_within("#[allow(dead_code)]", 0);
}
