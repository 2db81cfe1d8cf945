//! Registry of tracked project paths
//!
//! The registry is the source of truth for which projects participate in
//! fan-out sync. It persists to a TOML file in the config directory; every
//! mutation is written through [`rulesync_fs::write_text`], which renames a
//! temp file into place so a crash mid-write never leaves a corrupt file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One tracked project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Canonicalized project root (never the rules subdirectory itself).
    pub path: PathBuf,
    /// When the project was registered.
    pub added_at: DateTime<Utc>,
}

/// Durable, deduplicated list of tracked project paths.
///
/// Paths are canonicalized before comparison, so aliases of the same
/// directory collapse to one entry. Iteration order is insertion order.
#[derive(Debug, Serialize, Deserialize)]
pub struct Registry {
    /// Registry format version
    version: String,
    /// Tracked projects, in insertion order
    #[serde(default)]
    projects: Vec<ProjectEntry>,
    /// Path to the registry file (not serialized)
    #[serde(skip)]
    path: PathBuf,
}

impl Registry {
    /// Create a new empty registry bound to the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            version: "1.0".to_string(),
            projects: Vec::new(),
            path,
        }
    }

    /// Load the registry from its TOML file.
    ///
    /// An absent file yields an empty registry bound to `path`: first-run
    /// bootstrap, not an error. A present but unparseable file is an error.
    pub fn load(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new(path));
        }
        let content = rulesync_fs::read_text(&path)?;
        let mut registry: Self = toml::from_str(&content)?;
        registry.path = path;
        Ok(registry)
    }

    /// Persist the registry atomically to its backing file.
    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        rulesync_fs::write_text(&self.path, &content).map_err(|source| {
            Error::RegistryPersistence {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Track a project, deduplicating on the canonicalized path.
    ///
    /// Returns `false` (and does not write) when the project was already
    /// tracked. On a failed write the in-memory state reverts, so callers
    /// never observe a half-applied mutation.
    pub fn add_project(&mut self, path: &Path) -> Result<bool> {
        let canonical =
            dunce::canonicalize(path).map_err(|e| rulesync_fs::Error::io(path, e))?;

        if self.projects.iter().any(|p| p.path == canonical) {
            tracing::debug!(project = %canonical.display(), "project already tracked");
            return Ok(false);
        }

        self.projects.push(ProjectEntry {
            path: canonical,
            added_at: Utc::now(),
        });

        if let Err(e) = self.save() {
            self.projects.pop();
            return Err(e);
        }
        Ok(true)
    }

    /// Remove entries whose path no longer resolves to a directory.
    ///
    /// Only a definitive "not found" (or a path that now resolves to a
    /// non-directory) prunes an entry; a transient stat failure keeps it and
    /// logs a warning. Returns the number of entries removed; the pruned set
    /// is persisted when anything changed.
    pub fn clean(&mut self) -> Result<usize> {
        let mut kept = Vec::with_capacity(self.projects.len());
        let mut removed = 0usize;

        for entry in self.projects.drain(..) {
            match std::fs::metadata(&entry.path) {
                Ok(meta) if meta.is_dir() => kept.push(entry),
                Ok(_) => {
                    tracing::info!(
                        project = %entry.path.display(),
                        "pruning entry: path is no longer a directory"
                    );
                    removed += 1;
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::info!(project = %entry.path.display(), "pruning entry: directory is gone");
                    removed += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        project = %entry.path.display(),
                        error = %e,
                        "could not stat project; keeping entry"
                    );
                    kept.push(entry);
                }
            }
        }

        self.projects = kept;
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    /// Tracked projects in insertion order.
    pub fn entries(&self) -> &[ProjectEntry] {
        &self.projects
    }

    /// Tracked project paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.projects.iter().map(|p| p.path.as_path())
    }

    /// Whether `path` (canonicalized when possible) is tracked.
    pub fn contains(&self, path: &Path) -> bool {
        let canonical = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.projects.iter().any(|p| p.path == canonical)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
