//! [`TestSpace`] builder for rulesync test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write a rule file at `dir`/`rel`, creating parent directories.
///
/// # Panics
/// Panics if the write fails.
pub fn write_rule(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("write_rule: mkdir {} failed: {e}", parent.display()));
    }
    fs::write(&path, content)
        .unwrap_or_else(|e| panic!("write_rule: write {} failed: {e}", path.display()));
}

/// A temporary directory laid out like a rulesync installation plus a set of
/// project directories, with helper methods for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use rulesync_test_utils::TestSpace;
///
/// let space = TestSpace::new();
/// let project = space.project("app-one");
/// space.write_file("home/data/rules/general.md", "# rules");
/// space.assert_file_exists("home/data/rules/general.md");
/// ```
pub struct TestSpace {
    temp_dir: TempDir,
}

impl Default for TestSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSpace {
    /// Create an empty temporary directory with a `home/` subdirectory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("home")).unwrap();
        Self { temp_dir }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The `home/` directory. Root the application's config/data/log paths
    /// here to keep tests hermetic.
    pub fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    /// Create (if needed) and return a project directory under `projects/`.
    pub fn project(&self, name: &str) -> PathBuf {
        let path = self.root().join("projects").join(name);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("TestSpace::project: mkdir {name} failed: {e}"));
        path
    }

    /// Write a file at `rel` (relative to the root), creating parents.
    pub fn write_file(&self, rel: &str, content: &str) {
        write_rule(self.root(), rel, content);
    }

    /// Assert that `rel` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.root().join(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.root().join(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `rel` (relative to the root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let full_path = self.root().join(rel);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
