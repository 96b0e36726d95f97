// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern: every
//! component renders from a `ViewContext` borrowed from the application state
//! and reports user interaction through its own `Message` enum. No component
//! owns selection state.
//!
//! # Screens
//!
//! - [`library_view`] - Filtered library list
//! - [`settings`] - Application preferences with header bar
//!
//! # Components
//!
//! - [`header`] - Library screen top bar
//! - [`filter_row`] - Row of filter chips
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod filter_row;
pub mod header;
pub mod library_view;
pub mod settings;
pub mod styles;
pub mod theming;
