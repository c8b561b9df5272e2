//! Shopping verticals used to tag and filter products.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothes,
    Eyewear,
    Makeup,
}

/// Static display metadata for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

const CATEGORY_INFO: [CategoryInfo; 3] = [
    CategoryInfo {
        id: Category::Clothes,
        name: "Clothing",
        icon: "👕",
        description: "Try on shirts, dresses & more",
    },
    CategoryInfo {
        id: Category::Eyewear,
        name: "Eyewear",
        icon: "👓",
        description: "Sunglasses & prescription frames",
    },
    CategoryInfo {
        id: Category::Makeup,
        name: "Makeup",
        icon: "💄",
        description: "Lipstick, eyeshadow & more",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 3] = [Self::Clothes, Self::Eyewear, Self::Makeup];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Clothes => "clothes",
            Self::Eyewear => "eyewear",
            Self::Makeup => "makeup",
        }
    }

    #[must_use]
    pub const fn info(self) -> &'static CategoryInfo {
        match self {
            Self::Clothes => &CATEGORY_INFO[0],
            Self::Eyewear => &CATEGORY_INFO[1],
            Self::Makeup => &CATEGORY_INFO[2],
        }
    }

    /// Overlay glyph drawn on the simulated feed while an item of this category is worn.
    #[must_use]
    pub const fn overlay_glyph(self) -> &'static str {
        match self {
            Self::Clothes => "👕",
            Self::Eyewear => "👓",
            Self::Makeup => "💋",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>(), Ok(category));
            assert_eq!(category.to_string(), category.slug());
        }
        assert_eq!("  Eyewear ".parse::<Category>(), Ok(Category::Eyewear));
    }

    #[test]
    fn unknown_slug_is_rejected() {
        let err = "shoes".parse::<Category>().unwrap_err();
        assert_eq!(err, ParseCategoryError("shoes".to_string()));
        assert_eq!(err.to_string(), "unknown category 'shoes'");
    }

    #[test]
    fn info_matches_its_category() {
        for category in Category::ALL {
            let info = category.info();
            assert_eq!(info.id, category);
            assert!(!info.name.is_empty());
            assert!(!info.icon.is_empty());
        }
        assert_eq!(Category::Eyewear.info().name, "Eyewear");
    }

    #[test]
    fn serde_uses_lowercase_slugs() {
        let json = serde_json::to_string(&Category::Makeup).unwrap();
        assert_eq!(json, "\"makeup\"");
        let parsed: Category = serde_json::from_str("\"clothes\"").unwrap();
        assert_eq!(parsed, Category::Clothes);
    }
}
