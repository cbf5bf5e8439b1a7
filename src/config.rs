use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::buffer::DEFAULT_MAX_MESSAGES;
use crate::error::{ConsoleError, Result};

// Default configuration
pub const DEFAULT_THEME: &str = "dark";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// "dark" or "light"; affects the window chrome only
    pub theme: String,
    /// Messages kept in the list before the oldest are dropped
    pub max_messages: usize,
    /// Keep watching a transcript file for appended lines
    pub follow: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            max_messages: DEFAULT_MAX_MESSAGES,
            follow: false,
        }
    }
}

/// Per-run values from the command line, applied over the saved settings.
/// They are never written back to the settings file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub theme: Option<String>,
    pub max_messages: Option<usize>,
    /// A bare flag can only switch following on
    pub follow: bool,
}

impl Settings {
    /// Settings in effect for this run
    pub fn with_overrides(&self, overrides: &Overrides) -> Settings {
        Settings {
            theme: overrides.theme.clone().unwrap_or_else(|| self.theme.clone()),
            max_messages: overrides.max_messages.unwrap_or(self.max_messages),
            follow: self.follow || overrides.follow,
        }
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com", "ws-console", "ws-console").ok_or(ConsoleError::ConfigDir)?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("settings.json"))
}

/// Load settings from `path`. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&content).map_err(|source| ConsoleError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    let data = serde_json::to_string_pretty(settings).map_err(|source| ConsoleError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
