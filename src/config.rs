//! Configuration file support for pinview.
//!
//! Holds the viewer settings: where the data set is fetched from, the
//! viewport zoom limits and the log verbosity.

use pinview_viewport::ViewportConfig;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATA_URL, OPEN_LINK_LABEL};
use crate::model::UNTITLED_IMAGE;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Level for `console_log`, which takes a `log::Level` rather than a filter.
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// User-facing strings the viewer renders around the data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Heading for an image without a name
    #[serde(default = "default_untitled_image")]
    pub untitled_image: String,

    /// Text of an annotation's link
    #[serde(default = "default_open_link")]
    pub open_link: String,
}

fn default_untitled_image() -> String {
    UNTITLED_IMAGE.to_string()
}

fn default_open_link() -> String {
    OPEN_LINK_LABEL.to_string()
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            untitled_image: default_untitled_image(),
            open_link: default_open_link(),
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Data set location used when the page does not name one
    #[serde(default = "default_data_url")]
    pub data_url: String,

    /// Zoom limits and step
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI strings
    #[serde(default)]
    pub labels: Labels,
}

fn default_app_name() -> String {
    "pinview".to_string()
}

fn default_data_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            data_url: default_data_url(),
            viewport: ViewportConfig::default(),
            log_level: LogLevel::default(),
            labels: Labels::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.viewport.validate()?;
        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "pinview-config.json"
    }

    /// Get the default config file path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("pinview").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("pinview")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to `path`, creating parent directories.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<std::path::PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Zoom limits are unusable
    #[error("Invalid viewport settings: {0}")]
    Viewport(#[from] pinview_viewport::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.viewport, ViewportConfig::default());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_json_roundtrip_keeps_settings() {
        let mut config = AppConfig::new();
        config.data_url = "./data/harbour.json".to_string();
        config.log_level = LogLevel::Debug;
        config.viewport.max_zoom = 4.0;

        let json = config.to_json().unwrap();
        assert!(json.contains("\"log_level\": \"debug\""));

        let loaded = AppConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config.app_name, "pinview");
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.viewport, ViewportConfig::default());
    }

    #[test]
    fn test_version_too_new() {
        let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
        let result = AppConfig::from_json(&json);
        assert!(matches!(
            result,
            Err(ConfigError::VersionTooNew { file_version, .. }) if file_version == CONFIG_VERSION + 1
        ));
    }

    #[test]
    fn test_invalid_viewport_rejected() {
        let json = r#"{ "version": 1, "viewport": { "min_zoom": 3.0, "max_zoom": 2.0 } }"#;
        assert!(matches!(
            AppConfig::from_json(json),
            Err(ConfigError::Viewport(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_labels_default_and_override() {
        let config = AppConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config.labels.untitled_image, "(untitled)");
        assert_eq!(config.labels.open_link, "Open link");

        let json = r#"{ "version": 1, "labels": { "open_link": "Buka tautan" } }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.labels.open_link, "Buka tautan");
        assert_eq!(config.labels.untitled_image, "(untitled)");
    }

    #[test]
    fn test_log_level_filters() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("pinview-config-test-{}", std::process::id()));
        let path = dir.join("nested").join(AppConfig::default_filename());

        let mut config = AppConfig::new();
        config.log_level = LogLevel::Warn;
        config.viewport.zoom_step = 0.25;
        config.labels.untitled_image = "(tanpa nama)".to_string();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();
        assert_eq!(loaded, config);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = AppConfig::default_path() {
            assert!(path.ends_with("pinview/pinview-config.json"));
        }
    }
}
