//! Configuration module for facetr
//!
//! Manages per-view explorer settings: "load more" batch sizes, default
//! sort order, search matching mode and the search input delay.
//! Configuration is stored as TOML in the user's config directory and may be
//! overridden with `FACETR_*` environment variables.
//!
//! ```toml
//! search_delay_ms = 150
//! match_mode = "substring"
//!
//! [views.models]
//! batch_size = 12
//! default_sort = "recent"
//!
//! [views.galleries]
//! batch_size = 15
//! default_sort = "entries-desc"
//! ```

use crate::browse::ViewKind;
use crate::search::{DEFAULT_SEARCH_DELAY, MatchMode};
use crate::sort::SortOption;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for a single list view; unset fields fall back to view defaults
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ViewConfig {
    /// Items revealed per "load more"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,

    /// Sort order selected initially and restored by "clear all"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortOption>,
}

/// Per-view settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ViewsConfig {
    #[serde(default)]
    pub models: ViewConfig,
    #[serde(default)]
    pub images: ViewConfig,
    #[serde(default)]
    pub galleries: ViewConfig,
}

/// Resolved settings for one view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub batch_size: usize,
    pub default_sort: SortOption,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FacetrConfig {
    /// Pause after the last keystroke before search text is applied
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// How multi-word search queries are matched
    #[serde(default)]
    pub match_mode: MatchMode,

    #[serde(default)]
    pub views: ViewsConfig,
}

fn default_search_delay_ms() -> u64 {
    u64::try_from(DEFAULT_SEARCH_DELAY.as_millis()).unwrap_or(u64::MAX)
}

impl Default for FacetrConfig {
    fn default() -> Self {
        Self {
            search_delay_ms: default_search_delay_ms(),
            match_mode: MatchMode::default(),
            views: ViewsConfig::default(),
        }
    }
}

impl FacetrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("facetr").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path()?)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file yields the default configuration; environment
    /// overrides (`FACETR_SEARCH_DELAY_MS`, `FACETR_VIEWS__MODELS__BATCH_SIZE`, ...)
    /// apply either way.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or holds invalid settings.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("FACETR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Check that every configured default sort is offered by its view
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first offending view.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in ViewKind::ALL {
            if let Some(sort) = self.view_config(kind).default_sort
                && !SortOption::for_view(kind).contains(&sort)
            {
                return Err(ConfigError::Message(format!(
                    "Sort option '{sort}' is not available for {kind}"
                )));
            }
        }
        Ok(())
    }

    /// Raw settings for a view
    #[must_use]
    pub const fn view_config(&self, kind: ViewKind) -> &ViewConfig {
        match kind {
            ViewKind::Models => &self.views.models,
            ViewKind::Images => &self.views.images,
            ViewKind::Galleries => &self.views.galleries,
        }
    }

    /// Settings for a view with defaults filled in
    #[must_use]
    pub fn view(&self, kind: ViewKind) -> ViewSettings {
        let view = self.view_config(kind);
        ViewSettings {
            batch_size: view
                .batch_size
                .filter(|&n| n > 0)
                .unwrap_or_else(|| kind.default_batch_size()),
            default_sort: view.default_sort.unwrap_or_default(),
        }
    }

    #[must_use]
    pub const fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}
