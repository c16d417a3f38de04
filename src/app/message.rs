// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::analyzer;
use crate::ui::disclosure;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Analyzer(analyzer::Message),
    Help(disclosure::Message),
    /// Ctrl+Enter (Cmd+Enter on macOS) anywhere in the window.
    CheckShortcut,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SENTIMENT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Force live resolution regardless of config and environment.
    pub live: bool,
    /// Force mock resolution regardless of config and environment.
    pub test_mode: bool,
    /// Theme override.
    pub theme: Option<ThemeMode>,
}
