// SPDX-License-Identifier: MPL-2.0
//! Static explanation shown inside the help disclosure.

use crate::sentiment::{details, Sentiment};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Text};
use iced::Element;

/// Introductory sentence above the category list.
pub const INTRO: &str = "Using the MeaningCloud API, this tool analyzes text to determine \
its primary emotional tone:";

/// Short description of a category. `Undetermined` is not listed.
#[must_use]
pub fn category_description(sentiment: Sentiment) -> Option<&'static str> {
    match sentiment {
        Sentiment::VeryPositive => Some("Extremely favorable"),
        Sentiment::Positive => Some("Generally favorable"),
        Sentiment::Neutral => Some("Neither positive nor negative"),
        Sentiment::Negative => Some("Generally unfavorable"),
        Sentiment::VeryNegative => Some("Extremely unfavorable"),
        Sentiment::Undetermined => None,
    }
}

/// One bullet line, e.g. `• Positive (P): Generally favorable`.
#[must_use]
pub fn category_line(sentiment: Sentiment) -> Option<String> {
    category_description(sentiment).map(|description| {
        format!(
            "• {} ({}): {}",
            details(sentiment).label,
            sentiment.tag(),
            description
        )
    })
}

/// Bullet lines for every listed category, in display order.
#[must_use]
pub fn category_lines() -> Vec<String> {
    Sentiment::ALL.iter().filter_map(|s| category_line(*s)).collect()
}

/// Renders the explanation. Generic over the message type since it has no
/// interactive parts.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let bullets = category_lines().into_iter().fold(
        Column::new().spacing(spacing::XXS).padding([0.0, spacing::XS]),
        |column, line| column.push(Text::new(line).size(typography::BODY)),
    );

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(INTRO).size(typography::BODY))
        .push(bullets)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_match_the_five_categories() {
        assert_eq!(
            category_lines(),
            vec![
                "• Very Positive (P+): Extremely favorable",
                "• Positive (P): Generally favorable",
                "• Neutral (NEU): Neither positive nor negative",
                "• Negative (N): Generally unfavorable",
                "• Very Negative (N+): Extremely unfavorable",
            ]
        );
    }

    #[test]
    fn undetermined_is_not_listed() {
        assert_eq!(category_description(Sentiment::Undetermined), None);
        assert_eq!(category_line(Sentiment::Undetermined), None);
        assert!(category_lines()
            .iter()
            .all(|line| !line.contains("(NONE)") && !line.contains("Unable")));
    }

    #[test]
    fn every_determinate_category_has_a_line() {
        for sentiment in Sentiment::DETERMINATE {
            assert!(category_line(sentiment).is_some(), "{sentiment:?}");
        }
    }

    #[test]
    fn intro_names_the_provider() {
        assert!(INTRO.contains("MeaningCloud"));
    }
}
