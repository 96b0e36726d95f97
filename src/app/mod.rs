// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the library and settings
//! views.
//!
//! The `App` struct wires together the domains (library, localization,
//! preferences) and translates messages into side effects like config
//! persistence. Selection state (current filter, theme, language) lives here
//! and is handed down to the views, which report changes back as messages.

mod message;
mod screen;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::library::{catalog, FilterMode, LibraryItem};
use crate::ui::theming::ThemeMode;
use crate::ui::{filter_row, header, library_view, settings};
use iced::widget::Column;
use iced::{window, Element, Length, Size, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    items: Vec<LibraryItem>,
    selected_filter: FilterMode,
    theme_mode: ThemeMode,
    /// Where preferences are persisted. `None` means the platform config
    /// directory; tests inject a temporary path here.
    config_path: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("items", &self.items.len())
            .field("selected_filter", &self.selected_filter)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Flags::default(), Config::default(), None).0
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .run_with(move || App::new(flags))
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        Self::with_config(flags, config, None)
    }

    /// Builds the application from an explicit configuration instead of the
    /// one on disk. `config_path` overrides where preferences are written;
    /// `None` means the platform config directory.
    pub fn with_config(
        flags: Flags,
        config: Config,
        config_path: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);

        let app = Self {
            i18n,
            screen: Screen::Library,
            items: Vec::new(),
            selected_filter: config.filter.unwrap_or_default(),
            theme_mode: config.theme.unwrap_or_default(),
            config_path,
        };

        let task = match flags.catalog_path {
            Some(path) => Task::perform(
                async move { catalog::load_from_path(&path) },
                Message::CatalogLoaded,
            ),
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(header::Message::OpenSettings) => {
                self.screen = Screen::Settings;
            }
            Message::FilterRow(filter_row::Message::Selected(mode)) => {
                self.selected_filter = mode;
                self.persist_preferences();
            }
            Message::Settings(settings::Message::Back) => {
                self.screen = Screen::Library;
            }
            Message::Settings(settings::Message::LanguageSelected(locale)) => {
                self.i18n.set_locale(locale);
                self.persist_preferences();
            }
            Message::Settings(settings::Message::ThemeModeSelected(mode)) => {
                self.theme_mode = mode;
                self.persist_preferences();
            }
            Message::CatalogLoaded(Ok(items)) => {
                self.items = items;
            }
            Message::CatalogLoaded(Err(err)) => {
                // The empty state renders instead; the library stays empty.
                eprintln!("failed to load catalog: {}", err);
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Library => self.view_library(),
            Screen::Settings => settings::view(settings::ViewContext {
                i18n: &self.i18n,
                theme_mode: self.theme_mode,
            })
            .map(Message::Settings),
        }
    }

    fn view_library(&self) -> Element<'_, Message> {
        let header = header::view(header::ViewContext { i18n: &self.i18n }).map(Message::Header);

        let chips = filter_row::view(filter_row::ViewContext {
            i18n: &self.i18n,
            selected: self.selected_filter,
        })
        .map(Message::FilterRow);

        let list = library_view::view(library_view::ViewContext {
            i18n: &self.i18n,
            items: &self.items,
            selected: self.selected_filter,
        });

        Column::new()
            .push(header)
            .push(chips)
            .push(list)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Writes the current preferences back to the config file. A write
    /// failure never interrupts the UI.
    fn persist_preferences(&self) {
        let config = Config {
            language: Some(self.i18n.current_locale().to_string()),
            theme: Some(self.theme_mode),
            filter: Some(self.selected_filter),
        };
        let result = match &self.config_path {
            Some(path) => config::save_to_path(&config, path),
            None => config::save(&config),
        };
        if let Err(err) = result {
            eprintln!("failed to save config: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::{tempdir, TempDir};

    fn item(name: &str, favorite: bool, secs: u64) -> LibraryItem {
        LibraryItem {
            name: name.to_string(),
            sort_name: None,
            favorite: Some(favorite),
            created: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(secs)),
        }
    }

    /// An app whose preferences land in a temp dir, never in the real
    /// platform config directory.
    fn sandboxed_app(config: Config) -> (App, TempDir, PathBuf) {
        let dir = tempdir().expect("failed to create temp dir");
        let config_path = dir.path().join("settings.toml");
        let (app, _task) = App::with_config(Flags::default(), config, Some(config_path.clone()));
        (app, dir, config_path)
    }

    #[test]
    fn filter_selection_updates_state_and_persists_to_injected_path() {
        let (mut app, _dir, config_path) = sandboxed_app(Config::default());
        let _ = app.update(Message::FilterRow(filter_row::Message::Selected(
            FilterMode::Favorites,
        )));
        assert_eq!(app.selected_filter, FilterMode::Favorites);

        let saved = config::load_from_path(&config_path).expect("failed to load saved config");
        assert_eq!(saved.filter, Some(FilterMode::Favorites));
    }

    #[test]
    fn theme_selection_persists_to_injected_path() {
        let (mut app, _dir, config_path) = sandboxed_app(Config::default());
        let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
            ThemeMode::Dark,
        )));
        assert_eq!(app.theme_mode, ThemeMode::Dark);

        let saved = config::load_from_path(&config_path).expect("failed to load saved config");
        assert_eq!(saved.theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn with_config_restores_persisted_selection() {
        let config = Config {
            language: None,
            theme: Some(ThemeMode::Light),
            filter: Some(FilterMode::Recent),
        };
        let (app, _dir, _path) = sandboxed_app(config);
        assert_eq!(app.selected_filter, FilterMode::Recent);
        assert_eq!(app.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn default_app_starts_from_built_in_defaults() {
        // Independent of whatever is in the machine's config file.
        let app = App::default();
        assert_eq!(app.selected_filter, FilterMode::All);
        assert_eq!(app.theme_mode, ThemeMode::System);
        assert_eq!(app.screen, Screen::Library);
    }

    #[test]
    fn settings_navigation_round_trip() {
        let mut app = App::default();
        let _ = app.update(Message::Header(header::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::Settings(settings::Message::Back));
        assert_eq!(app.screen, Screen::Library);
    }

    #[test]
    fn catalog_load_success_populates_items() {
        let mut app = App::default();
        let _ = app.update(Message::CatalogLoaded(Ok(vec![
            item("Alpha", true, 1),
            item("Beta", false, 2),
        ])));
        assert_eq!(app.items.len(), 2);
    }

    #[test]
    fn catalog_load_failure_leaves_library_empty() {
        let mut app = App::default();
        let _ = app.update(Message::CatalogLoaded(Err(
            crate::error::Error::Catalog("broken".into()),
        )));
        assert!(app.items.is_empty());
    }

    #[test]
    fn view_renders_every_screen() {
        let mut app = App::default();
        let _ = app.view();
        let _ = app.update(Message::Header(header::Message::OpenSettings));
        let _ = app.view();
    }
}
