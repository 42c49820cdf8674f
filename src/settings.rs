/// User settings
///
/// Stored as JSON in the platform config directory:
/// - Linux: ~/.config/portfolio/settings.json
/// - macOS: ~/Library/Application Support/portfolio/settings.json
/// - Windows: %APPDATA%\portfolio\settings.json
///
/// Every field has a default, so a partial file (or no file at all) is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Initial window size in logical pixels
    pub window_width: f32,
    pub window_height: f32,

    /// Scroll offset past which the navbar turns opaque
    pub scroll_threshold: f32,

    /// `tracing` filter used when RUST_LOG is unset
    pub log_filter: String,

    /// Profile photo shown on Home and About
    pub profile_image: PathBuf,

    /// Path opened on launch
    pub start_route: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 860.0,
            scroll_threshold: 50.0,
            log_filter: "info".to_string(),
            profile_image: PathBuf::from("assets/profile.png"),
            start_route: "/".to_string(),
        }
    }
}

impl Settings {
    /// Where settings live when no `--config` is given
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portfolio").join("settings.json"))
    }

    /// Load settings
    ///
    /// An explicit path must exist. The default path may be absent, in
    /// which case defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read and parse one settings file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scroll_threshold, 50.0);
        assert_eq!(settings.start_route, "/");
        assert_eq!(settings.profile_image, PathBuf::from("assets/profile.png"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_json(r#"{ "scroll_threshold": 120.0 }"#).unwrap();
        assert_eq!(settings.scroll_threshold, 120.0);
        assert_eq!(settings.log_filter, "info");
        assert_eq!(settings.window_width, 1280.0);
    }

    #[test]
    fn test_serialization() {
        let mut settings = Settings::default();
        settings.start_route = "/projects".into();

        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "start_route": "/contact", "log_filter": "debug" }}"#).unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.start_route, "/contact");
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            Settings::load(Some(&missing)),
            Err(SettingsError::Read { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            Settings::from_file(file.path()),
            Err(SettingsError::Parse { .. })
        ));
    }
}
