//! Test fixtures for photo library testing.
//!
//! Builds throwaway photo roots with category folders so listing code can
//! be exercised against a real filesystem.

use std::path::{Path, PathBuf};

/// Creates an empty photo root in a temporary directory.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_photo_root() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Creates a category folder holding empty files with the given names.
///
/// # Panics
///
/// Panics if the folder or any file cannot be created.
pub fn create_category(root: &Path, category: &str, files: &[&str]) -> PathBuf {
    let dir = root.join(category);
    std::fs::create_dir_all(&dir).unwrap();
    for file in files {
        std::fs::write(dir.join(file), b"").unwrap();
    }
    dir
}

/// Creates a category folder with `count` photos named `photo_000.jpg`,
/// `photo_001.jpg` and so on, so lexicographic order matches numbering.
///
/// # Panics
///
/// Panics if the folder or any file cannot be created.
pub fn create_category_with_count(root: &Path, category: &str, count: usize) -> PathBuf {
    let names: Vec<String> = (0..count).map(|i| format!("photo_{i:03}.jpg")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    create_category(root, category, &refs)
}
