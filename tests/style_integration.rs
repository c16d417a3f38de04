// SPDX-License-Identifier: MPL-2.0
use iced::widget::button;
use iced::Theme;
use iced_sentiment::sentiment::{details, emphasis, Sentiment};
use iced_sentiment::ui::design_tokens::{palette, shadow};
use iced_sentiment::ui::styles;

#[test]
fn card_glow_follows_each_sentiment() {
    for sentiment in Sentiment::ALL {
        let style = styles::container::card(Some(emphasis(sentiment)))(&Theme::Light);
        assert_eq!(style.shadow.color, emphasis(sentiment).color);
        assert!(style.shadow.blur_radius >= shadow::LG.blur_radius);
    }
}

#[test]
fn extreme_sentiments_glow_stronger() {
    let card = |s| styles::container::card(Some(emphasis(s)))(&Theme::Dark);
    assert!(
        card(Sentiment::VeryPositive).shadow.blur_radius
            > card(Sentiment::Positive).shadow.blur_radius
    );
    assert!(
        card(Sentiment::VeryNegative).shadow.blur_radius
            > card(Sentiment::Negative).shadow.blur_radius
    );
}

#[test]
fn positive_texts_are_green_and_negative_texts_red() {
    for sentiment in [Sentiment::VeryPositive, Sentiment::Positive] {
        let color = details(sentiment).text_color;
        assert!(color.g > color.r);
    }
    for sentiment in [Sentiment::VeryNegative, Sentiment::Negative] {
        let color = details(sentiment).text_color;
        assert!(color.r > color.g);
    }
    assert_eq!(details(Sentiment::Neutral).text_color, palette::GRAY_500);
}

#[test]
fn check_button_is_dimmed_when_disabled() {
    let active = styles::button::primary(&Theme::Light, button::Status::Active);
    let disabled = styles::button::primary(&Theme::Light, button::Status::Disabled);
    assert_ne!(active.background, disabled.background);
}
