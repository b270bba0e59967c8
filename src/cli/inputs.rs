//! Input file collection.
//!
//! Expands command-line paths into a list of pixel map files. Files are
//! taken as given; directories are walked recursively for `.json` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Expand files and directories into input files.
///
/// Files found inside directories are sorted; explicit files keep their
/// command-line position. Missing paths are passed through so the caller
/// can report them alongside other per-file failures.
pub fn collect_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut inputs = Vec::new();

    for path in paths {
        if path.is_dir() {
            inputs.extend(scan_directory(path));
        } else {
            inputs.push(path.clone());
        }
    }

    inputs
}

fn scan_directory(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_json(p))
        .collect();

    found.sort();
    found
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
