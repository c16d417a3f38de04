// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod click_outside;

pub use animated_spinner::AnimatedSpinner;
pub use click_outside::{click_outside, ClickOutside};
