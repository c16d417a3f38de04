// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::analyzer;
use iced::keyboard::{self, Key, Modifiers};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Spinner frame interval while a request is in flight.
const SPINNER_FRAME: Duration = Duration::from_millis(16);

/// Routes the check shortcut when no widget handled the key press. The
/// focused text editor binds the same shortcut itself and captures it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            shortcut_message(&key, modifiers, status)
        }
        _ => None,
    })
}

/// Animation ticks, only while loading.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_FRAME).map(|now| Message::Analyzer(analyzer::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}

/// Message for a key press seen by the window-wide listener.
fn shortcut_message(key: &Key, modifiers: Modifiers, status: event::Status) -> Option<Message> {
    match status {
        event::Status::Ignored if analyzer::is_check_shortcut(key, modifiers) => {
            Some(Message::CheckShortcut)
        }
        _ => None,
    }
}
