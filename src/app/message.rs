// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::library::LibraryItem;
use crate::ui::filter_row;
use crate::ui::header;
use crate::ui::settings;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    FilterRow(filter_row::Message),
    Settings(settings::Message),
    /// Result from loading the catalog file at startup.
    CatalogLoaded(Result<Vec<LibraryItem>, Error>),
}

/// Startup options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Display language override (`--lang`).
    pub lang: Option<String>,
    /// Catalog file to browse, from the positional argument.
    pub catalog_path: Option<PathBuf>,
}
