//! Target directory settings.
//!
//! The candidate list is ordinary configuration: it has a built-in default,
//! can be loaded from a YAML settings file and can be replaced outright by
//! the caller (tests hand in temporary directories).

use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Directories searched for target files, in priority order
pub const DEFAULT_TARGET_DIRS: [&str; 3] = [
    "./targets",
    "~/.fakeroute/targets",
    "/etc/fakeroute/targets",
];

/// Errors found while validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("target_dirs cannot be empty")]
    NoTargetDirs,

    #[error("target_dirs entry {index} is an empty path")]
    EmptyTargetDir { index: usize },
}

/// Settings for target discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Candidate configuration roots; the first one that exists is used
    #[serde(default = "default_target_dirs")]
    pub target_dirs: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_dirs: default_target_dirs(),
        }
    }
}

impl Settings {
    /// Build settings from an explicit candidate list
    pub fn with_target_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            target_dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.target_dirs.is_empty() {
            return Err(SettingsError::NoTargetDirs);
        }
        if let Some(index) = self
            .target_dirs
            .iter()
            .position(|dir| dir.as_os_str().is_empty())
        {
            return Err(SettingsError::EmptyTargetDir { index });
        }
        Ok(())
    }
}

fn default_target_dirs() -> Vec<PathBuf> {
    DEFAULT_TARGET_DIRS.iter().map(PathBuf::from).collect()
}

/// Expand a leading `~` against `$HOME`.
///
/// Paths without a leading `~`, or any path when `$HOME` is unset or empty,
/// come back unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    expand_home_with(path, env::var_os("HOME"))
}

fn expand_home_with(path: &Path, home: Option<OsString>) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home.filter(|home| !home.is_empty()) {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}
