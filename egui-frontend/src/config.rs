//! # Configuration Module
//!
//! YAML configuration for the expense timeline. Every field has a default so a
//! partial (or missing) file is fine.
//!
//! ## Lookup order:
//! 1. Path in the `EXPENSE_TIMELINE_CONFIG` environment variable
//! 2. `<config dir>/expense-timeline/config.yaml`
//! 3. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use shared::CurrencyFormat;
use crate::errors::TimelineError;

pub const CONFIG_ENV_VAR: &str = "EXPENSE_TIMELINE_CONFIG";

/// Chart canvas and interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Canvas width in chart units
    pub width: f32,
    /// Canvas height in chart units
    pub height: f32,
    /// Space around the plot area
    pub padding: f32,
    /// Gap on each side of a visual bar inside its bar group
    pub bar_padding: f32,
    /// How long a touch must stay still to become a selection
    pub hold_duration_ms: u64,
    /// Draw the amount axis (quartile labels)
    pub show_y_axis: bool,
    pub label_font_size: f32,
}

impl ChartConfig {
    pub fn hold_duration(&self) -> Duration {
        Duration::from_millis(self.hold_duration_ms)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            padding: 40.0,
            bar_padding: 3.0,
            hold_duration_ms: 500,
            show_y_axis: false,
            label_font_size: 16.0,
        }
    }
}

/// Month carousel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Fraction of the panel width a drag must cover to change month
    pub swipe_threshold: f32,
    pub header_height: f32,
    /// Header slide animation length once a drag ends
    pub transition_secs: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 0.25,
            header_height: 32.0,
            transition_secs: 0.2,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub chart: ChartConfig,
    pub carousel: CarouselConfig,
    pub currency: CurrencyFormat,
    /// JSON file with the months to show; demo data when absent
    pub data_file: Option<PathBuf>,
}

impl TimelineConfig {
    /// Read a config file
    pub fn from_file(path: &Path) -> Result<Self, TimelineError> {
        let content = std::fs::read_to_string(path).map_err(|source| TimelineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, TimelineError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Where the config is looked up when no override is given
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("expense-timeline").join("config.yaml"))
    }

    /// Resolve the config path from an optional override, then the default location
    pub fn resolve_path(override_path: Option<PathBuf>) -> Option<PathBuf> {
        override_path.or_else(Self::default_path)
    }

    /// Load configuration, falling back to defaults on any problem
    pub fn load() -> Self {
        let override_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_from(Self::resolve_path(override_path))
    }

    pub fn load_from(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            info!("⚙️ No config location available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            info!("⚙️ No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                info!("⚙️ Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("⚠️ Ignoring unreadable config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TimelineConfig::default();
        assert_eq!(config.chart.width, 600.0);
        assert_eq!(config.chart.height, 400.0);
        assert_eq!(config.chart.padding, 40.0);
        assert_eq!(config.chart.bar_padding, 3.0);
        assert_eq!(config.chart.hold_duration(), Duration::from_millis(500));
        assert!(!config.chart.show_y_axis);
        assert_eq!(config.currency.decimal_places, 2);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "\
chart:
  hold_duration_ms: 300
  show_y_axis: true
currency:
  code: JPY
  decimal_places: 0
";
        let config = TimelineConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.chart.hold_duration_ms, 300);
        assert!(config.chart.show_y_axis);
        assert_eq!(config.chart.width, 600.0);
        assert_eq!(config.carousel, CarouselConfig::default());
        assert_eq!(config.currency, CurrencyFormat::new("JPY", 0));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "carousel:\n  swipe_threshold: 0.4\ndata_file: /tmp/months.json").unwrap();

        let config = TimelineConfig::load_from(Some(file.path().to_path_buf()));
        assert_eq!(config.carousel.swipe_threshold, 0.4);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/months.json")));
    }

    #[test]
    fn test_bad_or_missing_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chart: [not, a, map").unwrap();
        assert!(TimelineConfig::from_file(file.path()).is_err());
        let broken = TimelineConfig::load_from(Some(file.path().to_path_buf()));
        assert_eq!(broken, TimelineConfig::default());

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert_eq!(TimelineConfig::load_from(Some(missing)), TimelineConfig::default());
        assert_eq!(TimelineConfig::load_from(None), TimelineConfig::default());
    }

    #[test]
    fn test_override_path_wins() {
        let custom = PathBuf::from("/etc/timeline.yaml");
        assert_eq!(TimelineConfig::resolve_path(Some(custom.clone())), Some(custom));
    }
}
