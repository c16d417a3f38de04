// SPDX-License-Identifier: MPL-2.0
//! `iced_sentiment` is a small desktop form, built with the Iced GUI
//! framework, that classifies the sentiment of a piece of text.
//!
//! Text is scored by the MeaningCloud sentiment API, or by a random picker
//! in test mode, and the result is shown as a label, an emoji and a colored
//! glow around the form.

#![doc(html_root_url = "https://docs.rs/iced_sentiment/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod sentiment;
pub mod ui;
