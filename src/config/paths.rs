//! Path management for pasteme
//!
//! ## Path Resolution Order
//!
//! 1. `PASTEME_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory joined with `pasteme`
//!    (`$XDG_CONFIG_HOME/pasteme` or `~/.config/pasteme` on Linux)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::PastemeError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "PASTEME_CONFIG_DIR";

/// Locates the pasteme configuration files
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    base_dir: PathBuf,
}

impl ConfigPaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PastemeError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ConfigPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

fn resolve_default_path() -> Result<PathBuf, PastemeError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| PastemeError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("pasteme"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        let paths = ConfigPaths::new().unwrap();
        std::env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }
}
