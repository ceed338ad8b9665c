//! Recipe item types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil identifier, used for items the store has not assigned yet.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Check if this is the nil identifier.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ItemId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A recipe in the list.
///
/// Two items are equal when they share an identity, whatever their content.
/// Items with identical content but different ids are distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Stable unique identifier.
    pub id: ItemId,

    /// Primary display text.
    pub title: String,

    /// Whether the user marked this recipe as a favorite.
    #[serde(default)]
    pub favorite: bool,

    /// When the recipe was added.
    pub added_on: DateTime<Utc>,

    /// Named collections this recipe belongs to, e.g. "Desserts".
    #[serde(default)]
    pub collections: BTreeSet<String>,
}

impl Item {
    /// Create a new item with a fresh id, added now.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            favorite: false,
            added_on: Utc::now(),
            collections: BTreeSet::new(),
        }
    }

    /// Set the favorite flag.
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Set the added timestamp.
    pub fn with_added_on(mut self, added_on: DateTime<Utc>) -> Self {
        self.added_on = added_on;
        self
    }

    /// Add a collection membership.
    pub fn in_collection(mut self, name: impl Into<String>) -> Self {
        self.collections.insert(name.into());
        self
    }

    /// Check if this item belongs to the named collection.
    pub fn is_in_collection(&self, name: &str) -> bool {
        self.collections.contains(name)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_identity() {
        let a = Item::new("Pancakes");
        let mut renamed = a.clone();
        renamed.title = "Waffles".to_string();
        assert_eq!(a, renamed);

        let twin = Item {
            id: ItemId::new(),
            ..a.clone()
        };
        assert_ne!(a, twin);
    }

    #[test]
    fn test_builder() {
        let item = Item::new("Brownies")
            .with_favorite(true)
            .in_collection("Desserts")
            .in_collection("Baking");

        assert!(item.favorite);
        assert!(item.is_in_collection("Desserts"));
        assert!(!item.is_in_collection("Soups"));
        assert_eq!(item.collections.len(), 2);
    }

    #[test]
    fn test_nil_id() {
        assert!(ItemId::nil().is_nil());
        assert!(!ItemId::new().is_nil());
        assert_eq!(ItemId::nil(), ItemId::nil());
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
        assert_ne!(Item::new("A").id, Item::new("A").id);
    }

    #[test]
    fn test_serde_defaults() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "title": "Soup",
            "added_on": "2026-01-01T00:00:00Z"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Soup");
        assert!(!item.favorite);
        assert!(item.collections.is_empty());
    }
}
