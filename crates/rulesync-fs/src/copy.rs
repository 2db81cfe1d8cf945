//! Directory copy, listing, and rule-file detection
//!
//! Copy semantics are additive-overwrite throughout: files already present at
//! the destination are replaced when the source has a file of the same name,
//! and left alone otherwise. Nothing here deletes destination files.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::{Error, Result};

/// A single entry in a directory listing, as shown to the operator before an
/// overwrite is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
    pub modified: SystemTime,
}

/// Check whether `path` exists and is a directory.
///
/// Follows symlinks; a symlink to a directory counts.
pub fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Recursively copy `src` into `dst`, creating `dst` as needed.
///
/// Additive-overwrite: files in `dst` that also exist in `src` are replaced;
/// files in `dst` with no counterpart in `src` survive the copy. This is not
/// a mirror operation, and stale destination files are never deleted here.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::metadata(src).map_err(|e| Error::io(src, e))?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory {
            path: src.to_path_buf(),
        });
    }

    fs::create_dir_all(dst).map_err(|e| Error::io(dst, e))?;

    for entry in fs::read_dir(src).map_err(|e| Error::io(src, e))? {
        let entry = entry.map_err(|e| Error::io(src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        // is_dir() follows symlinks, so a linked subtree is copied as content
        if from.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| Error::io(&from, e))?;
        }
    }

    Ok(())
}

/// List the immediate contents of a directory, sorted by name.
pub fn list_dir(path: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(path).map_err(|e| Error::io(path, e))? {
        let entry = entry.map_err(|e| Error::io(path, e))?;
        let entry_path = entry.path();
        let meta = fs::metadata(&entry_path).map_err(|e| Error::io(&entry_path, e))?;
        let modified = meta.modified().map_err(|e| Error::io(&entry_path, e))?;

        entries.push(FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: meta.len(),
            modified,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Check whether `path` contains at least one file with the given extension,
/// searching recursively.
///
/// Hidden directories (names starting with `.`, e.g. `.git` in a cloned
/// ruleset) are not descended into. Returns `Ok(false)` for an empty or
/// marker-free tree.
pub fn has_rule_files(path: &Path, extension: &str) -> Result<bool> {
    for entry in fs::read_dir(path).map_err(|e| Error::io(path, e))? {
        let entry = entry.map_err(|e| Error::io(path, e))?;
        let entry_path = entry.path();

        if entry_path.is_dir() {
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            if has_rule_files(&entry_path, extension)? {
                return Ok(true);
            }
        } else if entry_path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == extension)
        {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Create a directory (and any missing parents) with the given Unix mode.
///
/// Succeeds silently if the directory already exists; an existing directory's
/// permissions are left unchanged. The mode is ignored on non-Unix platforms.
pub fn ensure_dir(path: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new()
            .recursive(true)
            .mode(mode)
            .create(path)
            .map_err(|e| Error::io(path, e))
    }
    #[cfg(not(unix))]
    {
        let _ = mode;
        fs::create_dir_all(path).map_err(|e| Error::io(path, e))
    }
}

/// Remove a directory and everything under it.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
}
