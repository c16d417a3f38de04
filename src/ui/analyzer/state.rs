// SPDX-License-Identifier: MPL-2.0
//! Form state machine: `Idle -> Loading -> Resolved -> Loading -> ...`.

use crate::sentiment::{emphasis, Emphasis, Sentiment};
use iced::widget::text_editor;
use std::fmt;
use std::time::{Duration, Instant};

/// Request lifecycle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No request has been made yet.
    Idle,
    /// A resolution is in flight.
    Loading { started: Instant },
    /// The last resolution finished.
    Resolved,
}

/// Messages handled by the form.
#[derive(Debug, Clone)]
pub enum Message {
    /// Edit in the text input.
    Edit(text_editor::Action),
    /// "Check" pressed (or the keyboard shortcut).
    Check,
    /// A resolution finished.
    Resolved(Sentiment),
    /// Animation tick while loading.
    Tick(Instant),
}

/// Side effects the parent must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Resolve this text and report back with [`Message::Resolved`].
    Resolve(String),
}

/// Form state: input text, last result and request phase.
pub struct State {
    input: text_editor::Content,
    sentiment: Option<Sentiment>,
    phase: Phase,
    spinner_elapsed: Duration,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("input_len", &self.input_text().len())
            .field("sentiment", &self.sentiment)
            .field("phase", &self.phase)
            .finish()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: text_editor::Content::new(),
            sentiment: None,
            phase: Phase::Idle,
            spinner_elapsed: Duration::ZERO,
        }
    }

    /// Starts with `text` already in the input.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            input: text_editor::Content::with_text(text),
            ..Self::new()
        }
    }

    pub(crate) fn input(&self) -> &text_editor::Content {
        &self.input
    }

    /// Current input text, exactly as typed.
    #[must_use]
    pub fn input_text(&self) -> String {
        self.input.text()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Last result. Cleared while a request is in flight.
    #[must_use]
    pub fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment
    }

    /// Result to render, only once the phase is `Resolved`.
    #[must_use]
    pub fn displayed_sentiment(&self) -> Option<Sentiment> {
        match self.phase {
            Phase::Resolved => self.sentiment,
            Phase::Idle | Phase::Loading { .. } => None,
        }
    }

    /// Card glow for the current result.
    #[must_use]
    pub fn panel_emphasis(&self) -> Option<Emphasis> {
        self.displayed_sentiment().map(emphasis)
    }

    #[must_use]
    pub fn spinner_elapsed(&self) -> Duration {
        self.spinner_elapsed
    }

    /// Enters `Loading` and asks for a resolution of the current text.
    /// Ignored while a request is already in flight.
    pub fn start_check(&mut self, now: Instant) -> Effect {
        if self.is_loading() {
            tracing::debug!("check ignored: request already in flight");
            return Effect::None;
        }
        self.sentiment = None;
        self.phase = Phase::Loading { started: now };
        self.spinner_elapsed = Duration::ZERO;
        Effect::Resolve(self.input_text())
    }

    /// Stores the result and leaves `Loading`. Late results are dropped.
    pub fn finish(&mut self, sentiment: Sentiment) {
        if !self.is_loading() {
            tracing::debug!(%sentiment, "stale result dropped");
            return;
        }
        self.sentiment = Some(sentiment);
        self.phase = Phase::Resolved;
    }

    /// Applies a message.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Edit(action) => {
                self.input.perform(action);
                Effect::None
            }
            Message::Check => self.start_check(Instant::now()),
            Message::Resolved(sentiment) => {
                self.finish(sentiment);
                Effect::None
            }
            Message::Tick(now) => {
                if let Phase::Loading { started } = self.phase {
                    self.spinner_elapsed = now.saturating_duration_since(started);
                }
                Effect::None
            }
        }
    }
}
