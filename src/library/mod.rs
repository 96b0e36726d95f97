// SPDX-License-Identifier: MPL-2.0
//! Media library data model and filtering.
//!
//! The library is an in-memory list of [`LibraryItem`]s, loaded once from a
//! catalog file. [`FilterMode`] reorders or narrows that list for display;
//! it never owns or mutates the list itself.

pub mod catalog;
pub mod filter;
pub mod types;

pub use filter::FilterMode;
pub use types::LibraryItem;
