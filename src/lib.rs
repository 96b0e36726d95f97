// SPDX-License-Identifier: MPL-2.0
//! `iced_shelf` is a small media library browser built with the Iced GUI framework.
//!
//! It displays a catalog of media items behind a row of filter chips (all,
//! recent, favorites, alphabetical) and demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod library;
pub mod ui;
