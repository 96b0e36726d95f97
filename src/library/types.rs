// SPDX-License-Identifier: MPL-2.0
//! Core item type for the media library.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A single entry in the media library.
///
/// All fields except `name` are optional: catalog sources routinely omit
/// sort keys, favorite flags, and creation timestamps. Accessors document
/// the fallback applied when a field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LibraryItem {
    /// Display name, always present.
    pub name: String,
    /// Normalized sort key. `None` means sorting falls back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    /// Per-user favorite flag. `None` is treated as not a favorite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    /// Creation timestamp. `None` when the source did not provide one.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_system_time_option",
        deserialize_with = "deserialize_system_time_option"
    )]
    pub created: Option<SystemTime>,
}

impl LibraryItem {
    /// The key used for alphabetical ordering: the normalized sort name when
    /// present, otherwise the display name.
    #[must_use]
    pub fn sort_key(&self) -> &str {
        self.sort_name.as_deref().unwrap_or(&self.name)
    }

    /// Returns `true` only when the favorite flag is present and set.
    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.favorite.unwrap_or(false)
    }
}

/// Serialize `Option<SystemTime>` as Unix timestamp in seconds.
fn serialize_system_time_option<S>(
    time: &Option<SystemTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match time {
        Some(t) => {
            let duration = t.duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
            serializer.serialize_some(&duration.as_secs())
        }
        None => serializer.serialize_none(),
    }
}

/// Deserialize `Option<SystemTime>` from Unix timestamp in seconds.
fn deserialize_system_time_option<'de, D>(deserializer: D) -> Result<Option<SystemTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<u64> = Option::deserialize(deserializer)?;
    Ok(opt.map(|secs| SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(secs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn item(name: &str) -> LibraryItem {
        LibraryItem {
            name: name.to_string(),
            sort_name: None,
            favorite: None,
            created: None,
        }
    }

    #[test]
    fn sort_key_prefers_sort_name() {
        let mut it = item("The Abyss");
        it.sort_name = Some("abyss".to_string());
        assert_eq!(it.sort_key(), "abyss");
    }

    #[test]
    fn sort_key_falls_back_to_name() {
        assert_eq!(item("Solaris").sort_key(), "Solaris");
    }

    #[test]
    fn absent_favorite_flag_is_not_favorite() {
        let mut it = item("Solaris");
        assert!(!it.is_favorite());
        it.favorite = Some(false);
        assert!(!it.is_favorite());
        it.favorite = Some(true);
        assert!(it.is_favorite());
    }

    #[test]
    fn created_serializes_as_unix_seconds() {
        let it = LibraryItem {
            name: "Solaris".to_string(),
            sort_name: None,
            favorite: Some(true),
            created: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1000)),
        };

        let serialized = toml::to_string(&it).expect("serialize");
        assert!(serialized.contains("created = 1000"));

        let deserialized: LibraryItem = toml::from_str(&serialized).expect("deserialize");
        assert_eq!(deserialized, it);
    }

    #[test]
    fn optional_fields_default_to_none() {
        let deserialized: LibraryItem = toml::from_str("name = \"Solaris\"").expect("deserialize");
        assert_eq!(deserialized, item("Solaris"));
    }
}
