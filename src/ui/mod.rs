// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`analyzer`] - The sentiment form and its request lifecycle
//! - [`disclosure`] - "?" trigger with a floating panel
//! - [`help`] - Explanation shown inside the disclosure
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner, outside-click detection)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod analyzer;
pub mod design_tokens;
pub mod disclosure;
pub mod help;
pub mod styles;
pub mod theming;
pub mod widgets;
