//! Application settings persistence for DailyLog.
//!
//! Stores user preferences (the selected log file and the entry date format)
//! in a JSON file at an OS-appropriate location. The shortcut database lives
//! beside it. This replaces the shared-preferences blob the Android app used;
//! the selected filename is an explicit configuration value handed to
//! whichever component composes the file-access layer.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::error::Result;

/// Entry timestamps default to minute precision.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const SETTINGS_FILENAME: &str = "settings.json";
const SHORTCUTS_DB_FILENAME: &str = "shortcuts.db";

/// Persisted application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Path of the log file entries are appended to, once the user picks one.
    pub log_file: Option<String>,
    /// strftime format used to stamp new entries.
    pub date_format: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_file: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Returns the DailyLog configuration directory.
///
/// - macOS / Linux: `~/.config/dailylog`
/// - Windows: `%APPDATA%/DailyLog`
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("DailyLog")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("dailylog")
    }
}

/// Returns the path to the settings JSON file.
pub fn settings_file_path() -> PathBuf {
    config_dir().join(SETTINGS_FILENAME)
}

/// Returns the path to the shortcut database.
pub fn shortcuts_db_path() -> PathBuf {
    config_dir().join(SHORTCUTS_DB_FILENAME)
}

/// Loads settings from disk; returns defaults if the file is missing or corrupt.
pub fn load_settings() -> AppSettings {
    match fs::read_to_string(settings_file_path()) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => AppSettings::default(),
    }
}

/// Saves settings to disk, creating parent directories as needed.
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    let path = settings_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert!(settings.log_file.is_none());
        assert_eq!(settings.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = AppSettings {
            log_file: Some("/home/me/daily.txt".to_string()),
            date_format: "%d/%m/%y %H:%M".to_string(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"logFile\""));
        assert!(json.contains("\"dateFormat\""));

        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.log_file.as_deref(), Some("/home/me/daily.txt"));
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let parsed: AppSettings =
            serde_json::from_str("{\"logFile\": 42}").unwrap_or_default();
        assert!(parsed.log_file.is_none());
    }

    #[test]
    fn test_db_lives_beside_settings() {
        assert_eq!(
            settings_file_path().parent(),
            shortcuts_db_path().parent()
        );
    }
}
