// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports mouse presses landing outside its content.
//!
//! The wrapper sees every event the runtime dispatches while it is part of
//! the widget tree, so the listener lives exactly as long as the widget is
//! mounted. Presses are never captured: the widget under the cursor still
//! receives them.
//!
//! The hit area is the union of the content's direct children, not the
//! content's bounding box. A right-aligned column holding a small trigger
//! above a wide panel therefore treats the empty strip beside the trigger,
//! and the spacing between the two, as outside.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Wraps content and publishes a message on presses outside of it.
pub struct ClickOutside<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_outside: Option<Message>,
}

impl<'a, Message, Theme, Renderer> ClickOutside<'a, Message, Theme, Renderer> {
    /// Creates a new disarmed `ClickOutside` wrapping the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_outside: None,
        }
    }

    /// Arms the wrapper only when `message` is `Some`.
    #[must_use]
    pub fn on_outside_maybe(mut self, message: Option<Message>) -> Self {
        self.on_outside = message;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ClickOutside<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(message) = &self.on_outside {
            if is_press_outside(event, &hit_regions(layout), cursor) {
                shell.publish(message.clone());
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ClickOutside<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: ClickOutside<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper function to create a click-outside wrapper.
pub fn click_outside<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> ClickOutside<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ClickOutside::new(content)
}

/// Bounds of the content's direct children, or of the content itself when
/// it has none.
pub fn hit_regions(layout: Layout<'_>) -> Vec<Rectangle> {
    let regions: Vec<Rectangle> = layout.children().map(|child| child.bounds()).collect();
    if regions.is_empty() {
        vec![layout.bounds()]
    } else {
        regions
    }
}

/// Whether `event` is a button press whose cursor misses every region.
///
/// An unknown cursor position is never treated as outside.
pub fn is_press_outside(event: &Event, regions: &[Rectangle], cursor: mouse::Cursor) -> bool {
    if !matches!(event, Event::Mouse(mouse::Event::ButtonPressed(_))) {
        return false;
    }
    cursor
        .position()
        .is_some_and(|position| !regions.iter().any(|region| region.contains(position)))
}
