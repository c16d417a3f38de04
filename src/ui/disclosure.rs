// SPDX-License-Identifier: MPL-2.0
//! Reusable disclosure: a round "?" trigger that toggles a floating panel.
//!
//! The panel closes on its "×" button, on a second trigger press, and on any
//! mouse press outside the trigger and panel. The outside-press listener is
//! the [`ClickOutside`](crate::ui::widgets::ClickOutside) wrapper, armed only
//! while the panel is visible, so it is released as soon as the panel hides
//! or the disclosure leaves the widget tree.
//!
//! The state is self-contained: parents only route messages back in.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::click_outside;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, center, container, opaque, Column, Container, Row, Text},
    Element, Length,
};

/// Visibility of the disclosure panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    visible: bool,
}

impl State {
    /// Creates a hidden disclosure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Messages emitted by the disclosure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Trigger pressed.
    Toggle,
    /// Close button pressed.
    Close,
    /// Mouse pressed outside the trigger and panel.
    PointerDownOutside,
}

/// Applies a disclosure message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Toggle => state.toggle(),
        Message::Close | Message::PointerDownOutside => state.hide(),
    }
}

/// Renders the trigger and, when visible, the panel below it.
pub fn view<'a>(state: &State, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let trigger = button(center(Text::new("?").size(typography::BODY)))
        .width(Length::Fixed(sizing::TRIGGER))
        .height(Length::Fixed(sizing::TRIGGER))
        .padding(0)
        .style(styles::button::round_trigger)
        .on_press(Message::Toggle);

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Right)
        .push(trigger);

    if state.is_visible() {
        column = column.push(opaque(build_panel(content.into())));
    }

    let armed = state.is_visible().then_some(Message::PointerDownOutside);
    click_outside(column).on_outside_maybe(armed).into()
}

fn build_panel(content: Element<'_, Message>) -> Element<'_, Message> {
    let close_button = button(Text::new("×").size(typography::BODY_LG))
        .padding(0)
        .style(styles::button::ghost)
        .on_press(Message::Close);

    let body = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Top)
        .push(Container::new(content).width(Length::Fill))
        .push(close_button);

    container(body)
        .width(Length::Fixed(sizing::DISCLOSURE_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::disclosure_panel)
        .into()
}
