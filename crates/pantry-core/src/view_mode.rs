//! View mode types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModeParseError;

/// Which subset of recipes the list shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ViewMode {
    /// Every recipe, in store order.
    #[default]
    All,
    /// Recipes marked as favorite.
    Favorites,
    /// Recipes added within the recents window.
    Recents,
    /// Recipes in a named collection. Without a name, behaves as `All`.
    Collection {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl ViewMode {
    /// Collection mode for the given name.
    ///
    /// Surrounding whitespace is trimmed, and a blank name means no
    /// collection, matching what [`FromStr`] produces. A `Collection` built
    /// directly with a blank or padded name does not survive a
    /// `Display`/`FromStr` round trip.
    pub fn collection(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            None
        } else if trimmed.len() == name.len() {
            Some(name)
        } else {
            Some(trimmed.to_string())
        };
        ViewMode::Collection { name }
    }

    /// Title shown in the navigation header.
    pub fn title(&self) -> &str {
        match self {
            ViewMode::All | ViewMode::Collection { name: None } => "All Recipes",
            ViewMode::Favorites => "Favorites",
            ViewMode::Recents => "Recents",
            ViewMode::Collection { name: Some(name) } => name,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::All => f.write_str("all"),
            ViewMode::Favorites => f.write_str("favorites"),
            ViewMode::Recents => f.write_str("recents"),
            ViewMode::Collection { name: None } => f.write_str("collection"),
            ViewMode::Collection { name: Some(name) } => write!(f, "collection:{}", name),
        }
    }
}

impl FromStr for ViewMode {
    type Err = ModeParseError;

    /// Parse `all`, `favorites`, `recents`, `collection` or `collection:<name>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (keyword, name) = match s.split_once(':') {
            Some((keyword, name)) => (keyword, Some(name)),
            None => (s, None),
        };

        match (keyword.trim().to_ascii_lowercase().as_str(), name) {
            ("all", None) => Ok(ViewMode::All),
            ("favorites", None) => Ok(ViewMode::Favorites),
            ("recents", None) => Ok(ViewMode::Recents),
            ("collection", None) => Ok(ViewMode::Collection { name: None }),
            ("collection", Some(name)) => Ok(ViewMode::collection(name)),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(ViewMode::default(), ViewMode::All);
    }

    #[test]
    fn test_parse() {
        assert_eq!("all".parse::<ViewMode>().unwrap(), ViewMode::All);
        assert_eq!("Favorites".parse::<ViewMode>().unwrap(), ViewMode::Favorites);
        assert_eq!("recents".parse::<ViewMode>().unwrap(), ViewMode::Recents);
        assert_eq!(
            "collection".parse::<ViewMode>().unwrap(),
            ViewMode::Collection { name: None }
        );
        assert_eq!(
            "collection:Desserts".parse::<ViewMode>().unwrap(),
            ViewMode::collection("Desserts")
        );
        assert_eq!(
            "collection:".parse::<ViewMode>().unwrap(),
            ViewMode::Collection { name: None }
        );
        assert!("tab:2".parse::<ViewMode>().is_err());
        assert!("favorites:x".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let mode = ViewMode::collection("Weeknight Dinners");
        assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
    }

    #[test]
    fn test_collection_normalizes_name() {
        let unnamed = ViewMode::Collection { name: None };
        assert_eq!(ViewMode::collection(""), unnamed);
        assert_eq!(ViewMode::collection("   "), unnamed);
        assert_eq!(ViewMode::collection(" Pad "), ViewMode::collection("Pad"));

        for name in ["", " Pad ", "Desserts", "Weeknight Dinners"] {
            let mode = ViewMode::collection(name);
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_title() {
        assert_eq!(ViewMode::All.title(), "All Recipes");
        assert_eq!(ViewMode::Collection { name: None }.title(), "All Recipes");
        assert_eq!(ViewMode::collection("Desserts").title(), "Desserts");
        assert_eq!(ViewMode::Recents.title(), "Recents");
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&ViewMode::collection("Desserts")).unwrap();
        assert_eq!(json, r#"{"mode":"collection","name":"Desserts"}"#);

        let mode: ViewMode = serde_json::from_str(r#"{"mode":"favorites"}"#).unwrap();
        assert_eq!(mode, ViewMode::Favorites);

        let mode: ViewMode = serde_json::from_str(r#"{"mode":"collection"}"#).unwrap();
        assert_eq!(mode, ViewMode::Collection { name: None });
    }
}
