//! Thin filesystem wrappers with sentinel returns.
//!
//! Failure is reported as an empty vector, `None`, or `false` rather than a
//! structured error; callers that need diagnostics should use [`std::fs`]
//! directly.
use std::{fs, io::Write as _, path::Path};

/// Reads a file as lines; empty on any failure.
#[must_use]
pub fn read_lines(path: impl AsRef<Path>) -> Vec<String> {
    read_all(path)
        .map(|text| text.lines().map(str::to_owned).collect())
        .unwrap_or_default()
}

/// Reads a whole file as text.
#[must_use]
pub fn read_all(path: impl AsRef<Path>) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// Writes `text` to a file, replacing any previous contents.
pub fn write(path: impl AsRef<Path>, text: &str) -> bool {
    fs::write(path, text).is_ok()
}

/// Appends `text` to a file, creating it if missing.
pub fn append(path: impl AsRef<Path>, text: &str) -> bool {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(text.as_bytes()))
        .is_ok()
}

/// Returns whether `path` exists.
#[must_use]
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// The size of a file in bytes.
#[must_use]
pub fn size(path: impl AsRef<Path>) -> Option<u64> {
    fs::metadata(path).ok().map(|meta| meta.len())
}

/// Deletes a file; `true` if it was removed.
pub fn delete(path: impl AsRef<Path>) -> bool {
    fs::remove_file(path).is_ok()
}

/// Renames `old` to `new`; `true` on success.
pub fn rename(old: impl AsRef<Path>, new: impl AsRef<Path>) -> bool {
    fs::rename(old, new).is_ok()
}

/// The names of a directory's entries, sorted; empty on any failure.
#[must_use]
pub fn list(path: impl AsRef<Path>) -> Vec<String> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
