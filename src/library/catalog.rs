// SPDX-License-Identifier: MPL-2.0
//! Catalog file loading.
//!
//! A catalog is a TOML file with one `[[items]]` table per library entry:
//!
//! ```toml
//! [[items]]
//! name = "The Abyss"
//! sort-name = "abyss"
//! favorite = true
//! created = 1690000000
//! ```
//!
//! `created` is a Unix timestamp in seconds. All fields but `name` are
//! optional.

use crate::error::{Error, Result};
use crate::library::LibraryItem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Catalog {
    #[serde(default)]
    items: Vec<LibraryItem>,
}

/// Loads library items from a catalog file.
///
/// An unreadable file maps to [`Error::Io`], a malformed one to
/// [`Error::Catalog`]. A file without any `[[items]]` tables is a valid
/// empty catalog.
pub fn load_from_path(path: &Path) -> Result<Vec<LibraryItem>> {
    let content = fs::read_to_string(path)?;
    let catalog: Catalog =
        toml::from_str(&content).map_err(|e| Error::Catalog(e.to_string()))?;
    Ok(catalog.items)
}
