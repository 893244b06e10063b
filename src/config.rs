//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::chart::ChartStyle;
use crate::notifications::NotificationTimings;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timings: TimingConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Delays of the simulated UI sequencing, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Simulated loading time of a section transition
    #[serde(default = "default_section_delay")]
    pub section_delay_ms: u64,

    /// Time before a pulsing stat card shows its new value
    #[serde(default = "default_pulse")]
    pub pulse_ms: u64,

    /// Click feedback on cards and buttons
    #[serde(default = "default_press")]
    pub press_ms: u64,

    /// Simulated latency of a call-to-action
    #[serde(default = "default_cta")]
    pub cta_ms: u64,

    /// Delay before the first chart draw after startup
    #[serde(default = "default_chart_init")]
    pub chart_init_ms: u64,

    #[serde(default = "default_slide_in")]
    pub notification_slide_in_ms: u64,

    #[serde(default = "default_dismiss")]
    pub notification_dismiss_ms: u64,

    #[serde(default = "default_slide_out")]
    pub notification_slide_out_ms: u64,
}

fn default_section_delay() -> u64 {
    500
}

fn default_pulse() -> u64 {
    100
}

fn default_press() -> u64 {
    150
}

fn default_cta() -> u64 {
    1000
}

fn default_chart_init() -> u64 {
    100
}

fn default_slide_in() -> u64 {
    100
}

fn default_dismiss() -> u64 {
    5000
}

fn default_slide_out() -> u64 {
    300
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            section_delay_ms: default_section_delay(),
            pulse_ms: default_pulse(),
            press_ms: default_press(),
            cta_ms: default_cta(),
            chart_init_ms: default_chart_init(),
            notification_slide_in_ms: default_slide_in(),
            notification_dismiss_ms: default_dismiss(),
            notification_slide_out_ms: default_slide_out(),
        }
    }
}

impl TimingConfig {
    /// The notification subset of the timings
    pub fn notifications(&self) -> NotificationTimings {
        NotificationTimings {
            slide_in_ms: self.notification_slide_in_ms,
            dismiss_after_ms: self.notification_dismiss_ms,
            slide_out_ms: self.notification_slide_out_ms,
        }
    }
}

/// Chart canvas configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default = "default_padding")]
    pub padding: f64,
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    400.0
}

fn default_padding() -> f64 {
    40.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
        }
    }
}

impl ChartConfig {
    /// Chart style with the configured padding
    pub fn style(&self) -> ChartStyle {
        ChartStyle {
            padding: self.padding,
            ..ChartStyle::default()
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(feature = "cli")]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("pulseboard").join("config.toml")),
            Some(PathBuf::from("./pulseboard.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Some(ms) = env_parse("PULSEBOARD_SECTION_DELAY_MS") {
            self.timings.section_delay_ms = ms;
        }
        if let Some(ms) = env_parse("PULSEBOARD_CTA_MS") {
            self.timings.cta_ms = ms;
        }

        if let Some(width) = env_parse("PULSEBOARD_CHART_WIDTH") {
            self.chart.width = width;
        }
        if let Some(height) = env_parse("PULSEBOARD_CHART_HEIGHT") {
            self.chart.height = height;
        }

        if let Ok(level) = std::env::var("PULSEBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PULSEBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.parse().ok()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Pulseboard Configuration
#
# Environment variables override these settings:
# - PULSEBOARD_SECTION_DELAY_MS
# - PULSEBOARD_CTA_MS
# - PULSEBOARD_CHART_WIDTH
# - PULSEBOARD_CHART_HEIGHT
# - PULSEBOARD_LOG_LEVEL
# - PULSEBOARD_LOG_FORMAT

[timings]
# Simulated loading time when switching sections (ms)
section_delay_ms = 500

# Stat cards pulse before showing a new value (ms)
pulse_ms = 100

# Click feedback on cards and buttons (ms)
press_ms = 150

# Simulated call-to-action latency (ms)
cta_ms = 1000

# Delay before the first chart draw (ms)
chart_init_ms = 100

# Notification slide-in, auto-dismiss and slide-out (ms)
notification_slide_in_ms = 100
notification_dismiss_ms = 5000
notification_slide_out_ms = 300

[chart]
# Canvas size in pixels
width = 800.0
height = 400.0

# Padding around the plot area
padding = 40.0

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_generated_config_matches_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.timings, TimingConfig::default());
        assert_eq!(config.chart, ChartConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[timings]\nsection_delay_ms = 50\n").unwrap();
        assert_eq!(config.timings.section_delay_ms, 50);
        assert_eq!(config.timings.pulse_ms, 100);
        assert_eq!(config.chart.width, 800.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nformat = \"json\"\n[chart]\nheight = 300.0").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.logging.is_json());
        assert_eq!(config.chart.height, 300.0);
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/pulseboard.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timings\nbroken").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_notification_timings() {
        let timings = TimingConfig::default().notifications();
        assert_eq!(timings, NotificationTimings::default());
    }
}
