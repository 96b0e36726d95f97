// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{palette, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Background for the header and settings toolbars.
pub fn toolbar(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);

    container::Style {
        text_color: None,
        background: Some(Background::Color(if is_light {
            palette::GRAY_100
        } else {
            palette::GRAY_900
        })),
        border: Border::default(),
        shadow: shadow::SM,
    }
}
