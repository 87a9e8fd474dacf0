//! Static content baked into the binary: projects, blog posts, pricing and
//! headline stats.

pub mod blog;
pub mod pricing;
pub mod projects;
pub mod stats;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use blog::{get_post_by_slug, list_posts, list_posts_by_tag, BlogPost};
pub use pricing::{pricing_tiers, PricingTier};
pub use projects::{
    get_project_by_slug, list_featured_projects, list_projects, Media, Project, ProjectStatus,
};
pub use stats::{format_stat, stats, Stat};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content not found")]
    NotFound,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid search pattern: {0}")]
    BadPattern(String),
}

/// Playing-card suit used as a visual theme tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn glyph(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }

    /// Tailwind text colour for the suit.
    pub fn text_class(self) -> &'static str {
        match self {
            Suit::Hearts => "text-suit-hearts",
            Suit::Diamonds => "text-suit-diamonds",
            // clubs and spades flip to white on dark backgrounds
            Suit::Clubs => "text-suit-clubs dark:text-white",
            Suit::Spades => "text-suit-spades dark:text-white",
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Project category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ai,
    Product,
    Quant,
    Music,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ai,
        Category::Product,
        Category::Quant,
        Category::Music,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Product => "product",
            Category::Quant => "quant",
            Category::Music => "music",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Ai => "AI",
            Category::Product => "Product",
            Category::Quant => "Quant",
            Category::Music => "Music",
        }
    }

    /// Card rank printed in the corners of a project card.
    pub fn rank(self) -> &'static str {
        match self {
            Category::Ai => "A",
            Category::Product => "K",
            Category::Quant => "Q",
            Category::Music => "J",
        }
    }

    /// Parse a listing filter, where `"all"` or an empty string means no filter.
    pub fn parse_filter(value: &str) -> Result<Option<Category>, ContentError> {
        match value {
            "" | "all" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ContentError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_and_filter() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
        }
        assert_eq!(Category::parse_filter("all"), Ok(None));
        assert_eq!(Category::parse_filter(""), Ok(None));
        assert_eq!(Category::parse_filter("quant"), Ok(Some(Category::Quant)));
        assert_eq!(
            Category::parse_filter("crypto"),
            Err(ContentError::UnknownCategory("crypto".to_string()))
        );
    }

    #[test]
    fn test_rank_table() {
        let ranks = Category::ALL.map(Category::rank);
        assert_eq!(ranks, ["A", "K", "Q", "J"]);
    }

    #[test]
    fn test_suit_colours() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
        assert!(Suit::Spades.text_class().contains("dark:text-white"));
    }
}
