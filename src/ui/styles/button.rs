// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Full-width primary action ("Check").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => palette::PRIMARY_500,
        button::Status::Hovered => palette::PRIMARY_700,
        button::Status::Pressed => palette::PRIMARY_600,
        button::Status::Disabled => palette::PRIMARY_400,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Disabled) {
            shadow::NONE
        } else {
            shadow::SM
        },
        ..Default::default()
    }
}

/// Round "?" trigger of the help disclosure.
pub fn round_trigger(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let color = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.text_primary,
        _ => palette::GRAY_500,
    };

    button::Style {
        background: None,
        text_color: color,
        border: Border {
            color,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Borderless "×" close button.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.text_primary,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}
