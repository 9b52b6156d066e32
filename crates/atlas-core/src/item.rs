use std::fmt;

use serde::{Deserialize, Serialize};

/// An object lying in a room or carried by the player.
///
/// Items move between rooms and the inventory but are never destroyed.
/// Names are unique by convention only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Name the player types to refer to the item.
    pub name: String,
    /// Short flavour text.
    pub description: String,
    /// Weight in kilograms. Decorative.
    pub weight: u32,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, description: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weight,
        }
    }

    /// Whether `word` names this item, ignoring case and surrounding spaces.
    pub fn matches(&self, word: &str) -> bool {
        self.name.trim().to_lowercase() == word.trim().to_lowercase()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kg) : {}", self.name, self.weight, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let item = Item::new("EMP-Blade", "Anti-AI weapon", 2);
        assert_eq!(item.to_string(), "EMP-Blade (2 kg) : Anti-AI weapon");
    }

    #[test]
    fn matches_ignores_case() {
        let item = Item::new("Fragment_Alpha", "Primary energy", 1);
        assert!(item.matches("fragment_alpha"));
        assert!(item.matches(" FRAGMENT_ALPHA "));
        assert!(!item.matches("fragment"));
    }
}
