// SPDX-License-Identifier: MPL-2.0
//! Static display tables keyed by [`Sentiment`].
//!
//! Two parallel tables: [`emphasis`] for the result panel glow and
//! [`details`] for the label, icon and text color. Both are exhaustive
//! `match`es, so a missing entry fails to compile.

use super::Sentiment;
use crate::ui::design_tokens::{palette, shadow};
use iced::{Color, Shadow};

/// Message shown when no sentiment could be determined.
pub const UNDETERMINED_MESSAGE: &str =
    "Unable to determine the sentiment. Please try different text.";

/// Shadow size used for the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Large,
    ExtraLarge,
}

/// Panel emphasis: a colored glow around the form card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emphasis {
    pub color: Color,
    pub strength: Strength,
}

impl Emphasis {
    const fn new(color: Color, strength: Strength) -> Self {
        Self { color, strength }
    }

    /// Concrete shadow for the panel container.
    #[must_use]
    pub fn shadow(self) -> Shadow {
        let base = match self.strength {
            Strength::Large => shadow::LG,
            Strength::ExtraLarge => shadow::XL,
        };
        Shadow {
            color: self.color,
            ..base
        }
    }
}

/// Label, icon and text color for one sentiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentDisplayEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub text_color: Color,
}

/// Emphasis table.
#[must_use]
pub const fn emphasis(sentiment: Sentiment) -> Emphasis {
    match sentiment {
        Sentiment::VeryPositive => Emphasis::new(palette::GREEN_600, Strength::ExtraLarge),
        Sentiment::Positive => Emphasis::new(palette::GREEN_500, Strength::Large),
        Sentiment::Neutral => Emphasis::new(palette::GRAY_500, Strength::Large),
        Sentiment::Negative => Emphasis::new(palette::RED_500, Strength::Large),
        Sentiment::VeryNegative => Emphasis::new(palette::RED_600, Strength::ExtraLarge),
        Sentiment::Undetermined => Emphasis::new(palette::GRAY_400, Strength::Large),
    }
}

/// Label/icon/color table.
#[must_use]
pub const fn details(sentiment: Sentiment) -> SentimentDisplayEntry {
    match sentiment {
        Sentiment::VeryPositive => SentimentDisplayEntry {
            label: "Very Positive",
            icon: "😍",
            text_color: palette::GREEN_600,
        },
        Sentiment::Positive => SentimentDisplayEntry {
            label: "Positive",
            icon: "😌",
            text_color: palette::GREEN_500,
        },
        Sentiment::Neutral => SentimentDisplayEntry {
            label: "Neutral",
            icon: "😑",
            text_color: palette::GRAY_500,
        },
        Sentiment::Negative => SentimentDisplayEntry {
            label: "Negative",
            icon: "😣",
            text_color: palette::RED_500,
        },
        Sentiment::VeryNegative => SentimentDisplayEntry {
            label: "Very Negative",
            icon: "😫",
            text_color: palette::RED_600,
        },
        Sentiment::Undetermined => SentimentDisplayEntry {
            label: "Unable to determine",
            icon: "❓",
            text_color: palette::GRAY_400,
        },
    }
}

/// Sentence shown in the result row.
#[must_use]
pub fn result_message(sentiment: Sentiment) -> String {
    if sentiment.is_determinate() {
        format!("The sentiment is {}.", details(sentiment).label.to_lowercase())
    } else {
        UNDETERMINED_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_sentiment_has_label_icon_and_color() {
        for sentiment in Sentiment::ALL {
            let entry = details(sentiment);
            assert!(!entry.label.is_empty(), "{sentiment} has no label");
            assert!(!entry.icon.is_empty(), "{sentiment} has no icon");
            assert!(entry.text_color.a > 0.0, "{sentiment} has no color");
        }
    }

    #[test]
    fn labels_and_icons_are_distinct() {
        let labels: HashSet<_> = Sentiment::ALL.iter().map(|s| details(*s).label).collect();
        let icons: HashSet<_> = Sentiment::ALL.iter().map(|s| details(*s).icon).collect();
        assert_eq!(labels.len(), Sentiment::ALL.len());
        assert_eq!(icons.len(), Sentiment::ALL.len());
    }

    #[test]
    fn extreme_sentiments_get_stronger_emphasis() {
        assert_eq!(emphasis(Sentiment::VeryPositive).strength, Strength::ExtraLarge);
        assert_eq!(emphasis(Sentiment::VeryNegative).strength, Strength::ExtraLarge);
        assert_eq!(emphasis(Sentiment::Positive).strength, Strength::Large);
        assert!(
            emphasis(Sentiment::VeryPositive).shadow().blur_radius
                > emphasis(Sentiment::Positive).shadow().blur_radius
        );
    }

    #[test]
    fn positive_is_green_and_negative_is_red() {
        assert_eq!(emphasis(Sentiment::Positive).color, palette::GREEN_500);
        assert_eq!(details(Sentiment::Positive).text_color, palette::GREEN_500);
        assert_eq!(emphasis(Sentiment::Negative).color, palette::RED_500);
    }

    #[test]
    fn shadow_takes_emphasis_color() {
        let shadow = emphasis(Sentiment::Negative).shadow();
        assert_eq!(shadow.color, palette::RED_500);
    }

    #[test]
    fn determinate_message_uses_lowercase_label() {
        assert_eq!(
            result_message(Sentiment::VeryPositive),
            "The sentiment is very positive."
        );
        assert_eq!(result_message(Sentiment::Neutral), "The sentiment is neutral.");
    }

    #[test]
    fn undetermined_message_asks_for_different_text() {
        assert_eq!(
            result_message(Sentiment::Undetermined),
            "Unable to determine the sentiment. Please try different text."
        );
    }
}
