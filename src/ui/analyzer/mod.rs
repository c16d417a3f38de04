// SPDX-License-Identifier: MPL-2.0
//! The sentiment form: text input, "Check" button and result row.
//!
//! The component owns the request lifecycle but performs no I/O. Pressing
//! "Check" yields [`Effect::Resolve`]; the application runs the resolution
//! and feeds the outcome back as [`Message::Resolved`].

mod state;
mod view;

pub use state::{Effect, Message, Phase, State};
pub use view::{button_label, input_height, is_check_shortcut, shortcut_binding, view, ViewContext};
pub use view::{CHECK_LABEL, LOADING_LABEL, PLACEHOLDER, TEST_MODE_HINT, TITLE};
