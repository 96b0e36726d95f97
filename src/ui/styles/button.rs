// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Pill-shaped filter chip in its unselected state.
pub fn chip(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (surface, text) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_400
            })),
            text_color: text,
            border: chip_border(),
            shadow: shadow::SM,
        },
        _ => button::Style {
            background: Some(Background::Color(surface)),
            text_color: text,
            border: chip_border(),
            shadow: shadow::NONE,
        },
    }
}

/// Pill-shaped filter chip for the currently selected mode.
///
/// Uses the brand colors so the selection reads the same in light and dark
/// themes.
pub fn chip_selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
        },
    }
}

/// Borderless button for toolbar actions (back, settings).
pub fn toolbar(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text = if is_light { palette::GRAY_900 } else { WHITE };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: text,
            border: Border {
                color: iced::Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
        },
        _ => button::Style {
            background: None,
            text_color: text,
            border: Border::default(),
            shadow: shadow::NONE,
        },
    }
}

fn chip_border() -> Border {
    Border {
        color: palette::GRAY_400,
        width: 1.0,
        radius: radius::FULL.into(),
    }
}
