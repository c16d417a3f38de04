// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The form card is centered on the page. The help disclosure is stacked on
//! top of the card and pinned to its top-right corner so the open panel
//! floats over the form instead of pushing it down.

use super::Message;
use crate::ui::analyzer;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::disclosure;
use crate::ui::help;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub analyzer: &'a analyzer::State,
    pub help: &'a disclosure::State,
    pub test_mode: bool,
}

/// Renders the page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = analyzer::view(
        ctx.analyzer,
        analyzer::ViewContext {
            test_mode: ctx.test_mode,
        },
    )
    .map(Message::Analyzer);

    let help_layer = Container::new(disclosure::view(ctx.help, help::view()).map(Message::Help))
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top);

    let layered = Stack::new().push(form).push(help_layer);

    let card = Container::new(layered)
        .max_width(sizing::CARD_MAX_WIDTH)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card(ctx.analyzer.panel_emphasis()));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::page)
        .into()
}
