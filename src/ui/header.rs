// SPDX-License-Identifier: MPL-2.0
//! Top bar for the library screen.
//!
//! Shows the application title and a button that navigates to the settings
//! screen.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, horizontal_space, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenSettings,
}

/// Renders the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE);

    let settings_button = button(Text::new(ctx.i18n.tr("header-settings-button")))
        .on_press(Message::OpenSettings)
        .style(styles::button::toolbar)
        .padding(spacing::XS);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(horizontal_space())
        .push(settings_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_returns_element() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
        // Smoke test to ensure the view renders without panicking.
    }
}
