//! Definition file discovery.
//!
//! Finds every `.btx` and `.the` file under a directory tree, the way a build
//! integration would before handing each one to the compiler.

use std::fs;
use std::path::{Path, PathBuf};

use defc_ir::Kind;

/// Discover definition files in a specific file or directory.
///
/// A file is returned as-is if it has a definition extension; a directory is
/// searched recursively. Results are sorted by path.
pub fn discover_definitions(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if path.is_file() {
        if Kind::from_path(path).is_some() {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        discover_recursive(path, &mut files);
        files.sort();
    }
    files
}

fn discover_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden files and directories
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'))
        {
            continue;
        }

        if path.is_dir() {
            if path.file_name().is_some_and(|name| name == "target") {
                continue;
            }
            discover_recursive(&path, files);
        } else if Kind::from_path(&path).is_some() {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests;
