// SPDX-License-Identifier: MPL-2.0
//! Form layout: heading, result row, text input and the "Check" button.

use super::state::{Message, Phase, State};
use crate::sentiment::{details, result_message, Sentiment};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::animated_spinner::{rotation_for, AnimatedSpinner};
use iced::keyboard::{key::Named, Key, Modifiers};
use iced::widget::{button, center, container, text_editor, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

pub const TITLE: &str = "Sentiment Analyser";
pub const TEST_MODE_HINT: &str = "Test Mode: Using random sentiments";
pub const PLACEHOLDER: &str = "Enter your text here...";
pub const CHECK_LABEL: &str = "Check";
pub const LOADING_LABEL: &str = "Loading...";

/// Line height multiplier applied by the text editor.
const LINE_HEIGHT: f32 = 1.3;

/// Rendering inputs that don't live in the form state.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    /// Resolutions are mocked; shows the test mode hint.
    pub test_mode: bool,
}

/// Label of the action button for the current phase.
#[must_use]
pub fn button_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Loading { .. } => LOADING_LABEL,
        Phase::Idle | Phase::Resolved => CHECK_LABEL,
    }
}

/// Enter with the platform command modifier (Ctrl, or Cmd on macOS).
#[must_use]
pub fn is_check_shortcut(key: &Key, modifiers: Modifiers) -> bool {
    matches!(key, Key::Named(Named::Enter)) && modifiers.command()
}

/// Editor binding for the check shortcut. `None` leaves the key to the
/// editor's default bindings.
#[must_use]
pub fn shortcut_binding(key: &Key, modifiers: Modifiers) -> Option<text_editor::Binding<Message>> {
    is_check_shortcut(key, modifiers).then_some(text_editor::Binding::Custom(Message::Check))
}

/// Fixed height giving the input [`sizing::INPUT_ROWS`] visible rows.
#[must_use]
pub fn input_height() -> f32 {
    f32::from(sizing::INPUT_ROWS) * typography::BODY * LINE_HEIGHT + 2.0 * spacing::SM
}

/// Renders the form content. The card container and the help disclosure are
/// layered on by the caller.
pub fn view(state: &State, ctx: ViewContext) -> Element<'_, Message> {
    let input = text_editor(state.input())
        .placeholder(PLACEHOLDER)
        .on_action(Message::Edit)
        .key_binding(|key_press| {
            shortcut_binding(&key_press.key, key_press.modifiers)
                .or_else(|| text_editor::Binding::from_key_press(key_press))
        })
        .size(typography::BODY)
        .padding(spacing::SM)
        .height(Length::Fixed(input_height()));

    let check = button(center(Text::new(button_label(state.phase())).size(typography::BODY_LG)))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe((!state.is_loading()).then_some(Message::Check));

    Column::new()
        .spacing(spacing::MD)
        .push(header(ctx))
        .push(result_row(state))
        .push(input)
        .push(check)
        .into()
}

fn header<'a>(ctx: ViewContext) -> Element<'a, Message> {
    // Right gap keeps the title clear of the floating help trigger.
    let title = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(TITLE).size(typography::TITLE))
        .push(Space::new().width(Length::Fill))
        .push(Space::new().width(Length::Fixed(sizing::TRIGGER + spacing::XS)));

    let mut column = Column::new().spacing(spacing::XXS).push(title);
    if ctx.test_mode {
        column = column.push(
            Text::new(TEST_MODE_HINT)
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );
    }
    column.into()
}

fn result_row(state: &State) -> Element<'_, Message> {
    let content: Element<'_, Message> = match (state.phase(), state.displayed_sentiment()) {
        (Phase::Loading { .. }, _) => {
            AnimatedSpinner::new(palette::PRIMARY_500, rotation_for(state.spinner_elapsed()))
                .into_element()
        }
        (_, Some(sentiment)) => result_line(sentiment),
        _ => Space::new().into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::RESULT_ROW_MIN_HEIGHT))
        .align_y(Vertical::Center)
        .into()
}

fn result_line<'a>(sentiment: Sentiment) -> Element<'a, Message> {
    let entry = details(sentiment);
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(entry.icon).size(typography::ICON_GLYPH))
        .push(
            container(
                Text::new(result_message(sentiment))
                    .size(typography::BODY_LG)
                    .color(entry.text_color),
            )
            .width(Length::Fill),
        )
        .into()
}
