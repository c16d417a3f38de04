// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: the `settings.toml`
//! file, the environment switches layered on top of it, and the clamping of
//! numeric values to their supported ranges.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[analysis]` - Test mode, provider credentials, endpoint, timeouts
//!
//! # Precedence
//!
//! Defaults < `settings.toml` < environment (`MEANINGCLOUD_API_KEY`,
//! `SENTIMENT_TEST_MODE`) < CLI flags. CLI flags are applied by the binary.
//!
//! # Examples
//!
//! ```no_run
//! use iced_sentiment::config;
//!
//! let (mut config, _warning) = config::load();
//! config.apply_env_overrides();
//! assert!(!config.analysis.language.is_empty());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable holding the provider access key.
pub const ENV_API_KEY: &str = "MEANINGCLOUD_API_KEY";

/// Environment variable toggling test mode. Only `false`/`0` disable it.
pub const ENV_TEST_MODE: &str = "SENTIMENT_TEST_MODE";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Sentiment analysis settings.
#[derive(Clone, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Route every request to the randomized mock instead of the provider.
    #[serde(default = "default_test_mode")]
    pub test_mode: bool,

    /// Provider access key.
    #[serde(default)]
    pub api_key: String,

    /// Scoring endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Language code sent with the text.
    #[serde(default = "default_language")]
    pub language: String,

    /// Live request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Simulated mock latency in milliseconds.
    #[serde(default = "default_mock_latency_ms")]
    pub mock_latency_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            test_mode: DEFAULT_TEST_MODE,
            api_key: String::new(),
            endpoint: default_endpoint(),
            language: default_language(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
        }
    }
}

// The key must never end up in logs.
impl fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("test_mode", &self.test_mode)
            .field("api_key_set", &!self.api_key.is_empty())
            .field("endpoint", &self.endpoint)
            .field("language", &self.language)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("mock_latency_ms", &self.mock_latency_ms)
            .finish()
    }
}

impl AnalysisConfig {
    /// Live request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Simulated mock latency, clamped to the supported range.
    #[must_use]
    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(
            self.mock_latency_ms
                .clamp(MIN_MOCK_LATENCY_MS, MAX_MOCK_LATENCY_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration, constructed once at startup and handed to
/// the components that need it.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Applies `MEANINGCLOUD_API_KEY` and `SENTIMENT_TEST_MODE` from the
    /// process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Applies environment-style overrides from an arbitrary lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            if !key.trim().is_empty() {
                self.analysis.api_key = key.trim().to_string();
            }
        }
        if let Some(raw) = lookup(ENV_TEST_MODE) {
            self.analysis.test_mode = parse_test_mode(&raw);
        }
    }
}

/// Test mode stays on for every value except an explicit `false` or `0`.
#[must_use]
pub fn parse_test_mode(raw: &str) -> bool {
    !matches!(raw.trim().to_lowercase().as_str(), "false" | "0")
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_test_mode() -> bool {
    DEFAULT_TEST_MODE
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_mock_latency_ms() -> u64 {
    DEFAULT_MOCK_LATENCY_MS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
