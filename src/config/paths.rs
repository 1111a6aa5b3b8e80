//! Path management for the contact book
//!
//! Only the settings file lives on disk; contacts stay in memory.
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACT_BOOK_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/contact-book` or `~/.config/contact-book`
//! 3. Windows: `%APPDATA%\contact-book`

use std::path::{Path, PathBuf};

use crate::error::ContactError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "CONTACT_BOOK_CONFIG_DIR";

const APP_DIR: &str = "contact-book";

/// Locates the contact book's configuration files
#[derive(Debug, Clone)]
pub struct ContactPaths {
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ContactError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
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

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            ContactError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ContactError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }
    let home = std::env::var("HOME")
        .map_err(|_| ContactError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ContactError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ContactError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(CONFIG_DIR_ENV, custom_path);
        let paths = ContactPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("contact-book");
        let paths = ContactPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.is_dir());
    }
}
