// SPDX-License-Identifier: MPL-2.0
//! Library list filtering and ordering.
//!
//! [`FilterMode`] is the closed set of list transformations selectable from
//! the filter chip row. Applying a mode is a pure operation: it borrows the
//! item list, returns a fresh `Vec`, and never fails. The caller owns the
//! currently selected mode; this module never stores it.
//!
//! # Ordering policy
//!
//! - `Recent` sorts by creation timestamp descending. Items without a
//!   timestamp compare as the smallest value (`Option` ordering), so they
//!   end up at the tail of the result.
//! - `Alphabetical` compares Unicode-lowercased sort keys. No locale
//!   collation is applied.
//!
//! Both sorts are stable: ties keep their input order.

use crate::library::LibraryItem;
use serde::{Deserialize, Serialize};

// =============================================================================
// Filter Mode
// =============================================================================

/// A list transformation selectable from the filter chip row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Show the library unchanged.
    #[default]
    All,
    /// Newest items first, by creation timestamp.
    Recent,
    /// Only items the user has marked as favorite.
    Favorites,
    /// Ascending by sort key, falling back to the display name.
    Alphabetical,
}

impl FilterMode {
    /// Every mode, in the order the chip row presents them.
    pub const ALL: [FilterMode; 4] = [
        FilterMode::All,
        FilterMode::Recent,
        FilterMode::Favorites,
        FilterMode::Alphabetical,
    ];

    /// The i18n message key for this mode's chip label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FilterMode::All => "filter-all",
            FilterMode::Recent => "filter-recent",
            FilterMode::Favorites => "filter-favorites",
            FilterMode::Alphabetical => "filter-alphabetical",
        }
    }

    /// Returns `true` if this mode changes the list (not `All`).
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, FilterMode::All)
    }

    /// Applies this mode to `items`, returning the transformed list.
    ///
    /// The input is never mutated. `All` preserves order and membership,
    /// `Favorites` is a stable filter, and the two sorting modes are stable
    /// sorts (see the module docs for the tie-breaking and missing-field
    /// policy).
    #[must_use]
    pub fn apply(self, items: &[LibraryItem]) -> Vec<LibraryItem> {
        match self {
            FilterMode::All => items.to_vec(),
            FilterMode::Recent => {
                let mut sorted = items.to_vec();
                // None < Some, so untimestamped items sink to the tail.
                sorted.sort_by(|a, b| b.created.cmp(&a.created));
                sorted
            }
            FilterMode::Favorites => items
                .iter()
                .filter(|item| item.is_favorite())
                .cloned()
                .collect(),
            FilterMode::Alphabetical => {
                let mut sorted = items.to_vec();
                // Cached keys: one lowercase per item instead of per comparison.
                sorted.sort_by_cached_key(|item| item.sort_key().to_lowercase());
                sorted
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
