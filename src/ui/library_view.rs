// SPDX-License-Identifier: MPL-2.0
//! Filtered library list.
//!
//! A pure view of `(items, selected mode)`: the filter is re-applied on every
//! render, which is cheap and idempotent, so the list always reflects the
//! caller's current selection without any state held here. The view emits no
//! messages and is generic over the caller's message type.

use crate::i18n::I18n;
use crate::library::{FilterMode, LibraryItem};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::time::SystemTime;

/// Contextual data needed to render the library list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The full, caller-owned item list. Never mutated here.
    pub items: &'a [LibraryItem],
    /// The mode to apply before rendering.
    pub selected: FilterMode,
}

/// Renders the filtered library list.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    if ctx.items.is_empty() {
        return empty_state(ctx.i18n);
    }

    let filtered = ctx.selected.apply(ctx.items);
    if filtered.is_empty() {
        return centered_hint(ctx.i18n.tr("library-no-matches"));
    }

    let mut list = Column::new().spacing(spacing::XXS).padding(spacing::SM);
    for item in filtered {
        list = list.push(item_row(item));
    }

    scrollable(list).width(Length::Fill).height(Length::Fill).into()
}

fn item_row<'a, M: 'a>(item: LibraryItem) -> Element<'a, M> {
    let marker = if item.is_favorite() { "★" } else { " " };
    let marker = Text::new(marker)
        .size(typography::BODY)
        .color(palette::WARNING_500);

    let name = Text::new(item.name.clone()).size(typography::BODY);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(marker)
        .push(name);

    if let Some(created) = item.created {
        row = row.push(
            Container::new(
                Text::new(format_created(created))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
        );
    }

    row.into()
}

fn empty_state<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let title = Text::new(i18n.tr("library-empty-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);
    let subtitle = Text::new(i18n.tr("library-empty-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn centered_hint<'a, M: 'a>(message: String) -> Element<'a, M> {
    Container::new(Text::new(message).size(typography::BODY).color(palette::GRAY_400))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Formats a creation timestamp for display, in the local time zone.
fn format_created(created: SystemTime) -> String {
    chrono::DateTime::<chrono::Local>::from(created)
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> LibraryItem {
        LibraryItem {
            name: name.to_string(),
            sort_name: None,
            favorite: None,
            created: Some(SystemTime::UNIX_EPOCH),
        }
    }

    #[test]
    fn view_renders_populated_list() {
        let i18n = I18n::default();
        let items = vec![item("Alpha"), item("Beta")];
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            items: &items,
            selected: FilterMode::Alphabetical,
        });
    }

    #[test]
    fn view_renders_empty_state() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            items: &[],
            selected: FilterMode::All,
        });
    }

    #[test]
    fn view_renders_no_match_hint() {
        let i18n = I18n::default();
        let items = vec![item("Alpha")];
        // No favorites in the list, so the filter excludes everything.
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            items: &items,
            selected: FilterMode::Favorites,
        });
    }

    #[test]
    fn created_formats_as_iso_date() {
        let formatted = format_created(SystemTime::UNIX_EPOCH);
        // Local time zone, so only the shape is stable.
        assert_eq!(formatted.len(), 10);
        assert_eq!(&formatted[4..5], "-");
    }
}
