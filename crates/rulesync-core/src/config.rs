//! Configuration value object and platform application paths
//!
//! Everything here is resolved once, before the engine is constructed, and
//! passed by reference afterwards. There is no ambient configuration lookup
//! anywhere else in the workspace.

use std::env;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable renaming the application for path derivation.
pub const APP_NAME_ENV: &str = "APP_NAME";
/// Environment variable rooting config/data/logs under one directory.
pub const HOME_ENV: &str = "RULESYNC_HOME";
/// Environment variable overriding the rules subdirectory name.
pub const RULES_DIR_ENV: &str = "RULESYNC_RULES_DIR";
/// Environment variable supplying the default repository URL.
pub const DEFAULT_REPO_ENV: &str = "RULESYNC_DEFAULT_REPO";

/// Application configuration, constructed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Application name, used to derive platform directories.
    pub app_name: String,
    /// Name of the rules subdirectory inside each project (and of the main
    /// location inside the data directory).
    pub rules_dir_name: String,
    /// File name of the durable registry inside the config directory.
    pub registry_file_name: String,
    /// Extension that marks a file as a rule file.
    pub rule_extension: String,
    /// Unix mode for directories the tool creates.
    pub dir_mode: u32,
    /// Default URL offered when fetching a remote ruleset.
    pub default_repo_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "rulesync".to_string(),
            rules_dir_name: ".rules".to_string(),
            registry_file_name: "registry.toml".to_string(),
            rule_extension: "md".to_string(),
            dir_mode: 0o755,
            default_repo_url: None,
        }
    }
}

impl Config {
    /// Defaults overridden by environment variables where set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(name) = env::var(APP_NAME_ENV) {
            if !name.is_empty() {
                config.app_name = name;
            }
        }
        if let Ok(dir) = env::var(RULES_DIR_ENV) {
            if !dir.is_empty() {
                config.rules_dir_name = dir;
            }
        }
        if let Ok(url) = env::var(DEFAULT_REPO_ENV) {
            if !url.is_empty() {
                config.default_repo_url = Some(url);
            }
        }
        config
    }
}

/// Platform-appropriate directories for one application name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Resolve directories for `app_name` from the platform conventions.
    ///
    /// When `RULESYNC_HOME` is set, all three live under that single root
    /// instead; end-to-end tests rely on this to stay hermetic.
    pub fn resolve(app_name: &str) -> Result<Self> {
        if let Ok(root) = env::var(HOME_ENV) {
            if !root.is_empty() {
                return Ok(Self::under_root(Path::new(&root)));
            }
        }

        let config_dir = dirs::config_dir()
            .ok_or(Error::NoHomeDirectory)?
            .join(app_name);
        let data_dir = dirs::data_local_dir()
            .ok_or(Error::NoHomeDirectory)?
            .join(app_name);
        let log_dir = data_dir.join("logs");

        Ok(Self {
            config_dir,
            data_dir,
            log_dir,
        })
    }

    /// All three directories under one root.
    pub fn under_root(root: &Path) -> Self {
        Self {
            config_dir: root.join("config"),
            data_dir: root.join("data"),
            log_dir: root.join("logs"),
        }
    }

    /// Create the config, data, and log directories with the given mode.
    pub fn ensure(&self, mode: u32) -> Result<()> {
        for dir in [&self.config_dir, &self.data_dir, &self.log_dir] {
            rulesync_fs::ensure_dir(dir, mode)?;
        }
        Ok(())
    }

    /// The main ruleset location.
    pub fn rules_dir(&self, rules_dir_name: &str) -> PathBuf {
        self.data_dir.join(rules_dir_name)
    }

    /// The durable registry file.
    pub fn registry_file(&self, registry_file_name: &str) -> PathBuf {
        self.config_dir.join(registry_file_name)
    }
}
