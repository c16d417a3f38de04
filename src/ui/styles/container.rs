// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::sentiment::Emphasis;
use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background behind the card.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.page_background)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// The form card. `emphasis` colors the glow; `None` draws no glow.
pub fn card(emphasis: Option<Emphasis>) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(scheme.card_background)),
            text_color: Some(scheme.text_primary),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: emphasis.map_or(shadow::NONE, Emphasis::shadow),
            ..Default::default()
        }
    }
}

/// Floating disclosure panel.
pub fn disclosure_panel(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.card_background)),
        text_color: Some(scheme.text_secondary),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            ..shadow::LG
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{emphasis, Sentiment};

    #[test]
    fn card_without_emphasis_has_no_glow() {
        let style = card(None)(&Theme::Light);
        assert_eq!(style.shadow.blur_radius, 0.0);
    }

    #[test]
    fn card_glow_uses_sentiment_color() {
        let positive = emphasis(Sentiment::Positive);
        let style = card(Some(positive))(&Theme::Light);
        assert_eq!(style.shadow.color, positive.color);
        assert!(style.shadow.blur_radius > 0.0);
    }

    #[test]
    fn panel_has_border_and_background() {
        let style = disclosure_panel(&Theme::Dark);
        assert!(style.background.is_some());
        assert!(style.border.width > 0.0);
    }
}
