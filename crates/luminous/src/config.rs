//! Dashboard configuration loaded from TOML.

use derive_getters::Getters;
use luminous_core::{Campaign, Record, SortDirection};
use luminous_error::{ConfigError, LuminousResult, TableError, TableErrorKind};
use luminous_export::DEFAULT_FILE_PREFIX;
use luminous_table::TableOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// File name looked up under the user's config directory.
pub const CONFIG_FILE_NAME: &str = "luminous.toml";

/// Campaign rows per page unless configured.
pub const DEFAULT_DASHBOARD_PAGE_SIZE: usize = 8;

/// Column the campaign table is sorted on unless configured.
pub const DEFAULT_SORT_KEY: &str = "name";

/// Top-level dashboard configuration.
///
/// Every section and field is optional; missing values take their defaults.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct DashboardConfig {
    /// Campaign table settings
    table: TableSettings,
    /// Live metric settings
    live: LiveSettings,
    /// CSV export settings
    export: ExportSettings,
    /// Logging settings
    logging: LoggingSettings,
}

/// `[table]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct TableSettings {
    /// Rows per page
    page_size: usize,
    /// Column sorted on startup
    sort_key: Option<String>,
    /// Direction of the startup sort
    sort_direction: SortDirection,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_DASHBOARD_PAGE_SIZE,
            sort_key: Some(DEFAULT_SORT_KEY.to_string()),
            sort_direction: SortDirection::Asc,
        }
    }
}

/// `[live]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct LiveSettings {
    /// Milliseconds between metric updates
    tick_interval_ms: u64,
    /// Fixed RNG seed for reproducible runs
    seed: Option<u64>,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 3_000,
            seed: None,
        }
    }
}

/// `[export]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct ExportSettings {
    /// Directory CSV files are written to
    directory: PathBuf,
    /// File name prefix
    file_prefix: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    level: String,
    /// Log file used while the dashboard owns the terminal
    file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Log file path, defaulting to `luminous.log` in the temp directory.
    pub fn file_or_default(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("luminous.log"))
    }
}

impl DashboardConfig {
    /// Load and validate configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> LuminousResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Load from `path`, else the user config file if present, else defaults.
    pub fn load(path: Option<&Path>) -> LuminousResult<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => {
                info!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/luminous/luminous.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("luminous").join(CONFIG_FILE_NAME))
    }

    /// Reject values the dashboard cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.page_size == 0 {
            return Err(ConfigError::new("table.page_size must be greater than zero"));
        }
        if self.live.tick_interval_ms == 0 {
            return Err(ConfigError::new(
                "live.tick_interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Interval between live metric updates.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.live.tick_interval_ms)
    }

    /// Table options for the campaign view described by the `[table]` section.
    pub fn table_options(&self) -> Result<TableOptions<Campaign>, TableError> {
        let options = TableOptions::new().with_page_size(self.table.page_size);
        match &self.table.sort_key {
            Some(name) => {
                let key = Campaign::field_named(name)
                    .ok_or_else(|| TableError::new(TableErrorKind::UnknownField(name.clone())))?;
                Ok(options.with_initial_sort(key, self.table.sort_direction))
            }
            None => Ok(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_secs(3));
        assert_eq!(config.export().file_prefix(), "campaigns_report");
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let config = DashboardConfig::default()
            .with_live(LiveSettings::default().with_tick_interval_ms(0));
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("tick_interval_ms"));
    }
}
