// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use std::str::FromStr;

/// Color palette for the surfaces the form draws itself.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub page_background: Color,
    pub card_background: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::SLATE_100,
            card_background: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_500,
            border: palette::GRAY_300,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::GRAY_900,
            card_background: Color::from_rgb(0.15, 0.15, 0.17),
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            border: palette::GRAY_700,
        }
    }

    /// Picks the scheme matching an active Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        let bg = theme.extended_palette().background.base.color;
        if (bg.r + bg.g + bg.b) / 3.0 < 0.5 {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme_mode: {}", other)),
        }
    }
}
