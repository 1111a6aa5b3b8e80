//! User settings for the contact book
//!
//! Display preferences only: default page size for listings, whether to use
//! colors, and how birthdays are printed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::ContactPaths;
use crate::error::ContactError;

/// User settings, stored as `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Records per page when `show` is given no size
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Whether terminal output is colored
    #[serde(default = "default_color")]
    pub color: bool,

    /// Birthday display format (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_page_size() -> usize {
    5
}

fn default_color() -> bool {
    true
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            page_size: default_page_size(),
            color: default_color(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ContactError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ContactError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.page_size == 0 {
            warn!(
                path = %settings_path.display(),
                "page_size of 0 in settings, using default"
            );
            settings.page_size = default_page_size();
        }

        Ok(settings)
    }

    /// Override the page size from the command line
    ///
    /// A size of 0 is ignored with a warning and the current size kept.
    pub fn override_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            warn!(
                kept = self.page_size,
                "--page-size 0 ignored, page size must be at least 1"
            );
            return;
        }
        self.page_size = page_size;
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactPaths) -> Result<(), ContactError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ContactError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
