// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form, the help
//! disclosure and the resolution service.
//!
//! The `App` struct owns the component states and translates component
//! effects into tasks. Configuration precedence (CLI over environment over
//! file over defaults) is settled here once, before the window opens.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Result;
use crate::sentiment::{Mode, Resolver};
use crate::ui::analyzer;
use crate::ui::disclosure;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    analyzer: analyzer::State,
    help: disclosure::State,
    resolver: Resolver,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("analyzer", &self.analyzer)
            .field("help_visible", &self.help.is_visible())
            .field("mode", &self.resolver.mode())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Loads `settings.toml`, then layers environment variables and CLI flags
/// on top.
pub fn resolve_config(flags: &Flags) -> Config {
    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!(%warning, "using default configuration");
    }
    config.apply_env_overrides();
    apply_flags(&mut config, flags);
    config
}

/// Applies CLI flags. `--live` wins over `--test-mode` when both are given.
pub fn apply_flags(config: &mut Config, flags: &Flags) {
    if flags.test_mode {
        config.analysis.test_mode = true;
    }
    if flags.live {
        config.analysis.test_mode = false;
    }
    if let Some(theme) = flags.theme {
        config.general.theme_mode = theme;
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    let config = resolve_config(&flags);
    let resolver = Resolver::from_config(&config)?;
    tracing::info!(
        mode = ?resolver.mode(),
        api_key_set = !config.analysis.api_key.is_empty(),
        "starting"
    );

    // iced 0.14 requires a `Fn` boot closure.
    let theme_mode = config.general.theme_mode;
    let boot = move || App::new(resolver.clone(), theme_mode);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Creates the initial state. Nothing runs until the first "Check".
    pub fn new(resolver: Resolver, theme_mode: ThemeMode) -> (Self, Task<Message>) {
        let app = App {
            analyzer: analyzer::State::new(),
            help: disclosure::State::new(),
            resolver,
            theme_mode,
        };
        (app, Task::none())
    }

    #[must_use]
    pub fn analyzer(&self) -> &analyzer::State {
        &self.analyzer
    }

    #[must_use]
    pub fn help(&self) -> &disclosure::State {
        &self.help
    }

    #[must_use]
    pub fn test_mode(&self) -> bool {
        self.resolver.mode() == Mode::Mock
    }

    fn title(&self) -> String {
        analyzer::TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.analyzer.is_loading()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Analyzer(message) => {
                let effect = self.analyzer.update(message);
                self.handle_effect(effect)
            }
            Message::CheckShortcut => {
                let effect = self.analyzer.update(analyzer::Message::Check);
                self.handle_effect(effect)
            }
            Message::Help(message) => {
                disclosure::update(&mut self.help, message);
                Task::none()
            }
        }
    }

    fn handle_effect(&self, effect: analyzer::Effect) -> Task<Message> {
        match effect {
            analyzer::Effect::None => Task::none(),
            analyzer::Effect::Resolve(text) => {
                tracing::debug!(chars = text.chars().count(), "resolving sentiment");
                let resolver = self.resolver.clone();
                Task::perform(async move { resolver.resolve(&text).await }, |sentiment| {
                    Message::Analyzer(analyzer::Message::Resolved(sentiment))
                })
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            analyzer: &self.analyzer,
            help: &self.help,
            test_mode: self.test_mode(),
        })
    }
}
