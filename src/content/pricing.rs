use serde::Serialize;

use super::Suit;

/// An engagement tier on the hire page, drawn as a playing card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub suit: Suit,
    pub rank: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

static TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Quick Win",
        suit: Suit::Clubs,
        rank: "J",
        description: "Single feature or MVP slice shipped fast.",
        price: "$1k–5k",
        features: &[
            "One focused feature",
            "1–2 week delivery",
            "Modern stack",
            "Mobile responsive",
            "Production ready",
            "Clean handoff docs",
        ],
        featured: false,
    },
    PricingTier {
        name: "Full Build",
        suit: Suit::Hearts,
        rank: "Q",
        description: "Complete product with polish and integrations.",
        price: "$5k–10k",
        features: &[
            "End‑to‑end product",
            "3–4 week timeline",
            "Database + API setup",
            "Auth & payments",
            "Admin dashboard",
            "Testing + deployment",
            "2 weeks post‑launch support",
        ],
        featured: false,
    },
    PricingTier {
        name: "Scale Ready",
        suit: Suit::Spades,
        rank: "K",
        description: "Complex platforms built to handle real growth.",
        price: "$10k–20k",
        features: &[
            "Multi‑feature platform",
            "4–6 week build",
            "Real‑time capabilities",
            "Advanced integrations",
            "Performance tuning",
            "Scalable architecture",
            "4 weeks ongoing support",
        ],
        featured: false,
    },
    PricingTier {
        name: "White Glove",
        suit: Suit::Diamonds,
        rank: "A",
        description: "Personal partnership for your most ambitious project.",
        price: "$20k+",
        features: &[
            "Your dedicated engineer",
            "Custom timeline & scope",
            "Weekly strategy calls",
            "Iterative development",
            "Premium architecture",
            "Unlimited revisions",
            "Long‑term partnership",
        ],
        featured: true,
    },
];

pub fn pricing_tiers() -> &'static [PricingTier] {
    TIERS
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_one_tier_per_suit() {
        let suits = pricing_tiers().iter().map(|t| t.suit).collect::<HashSet<_>>();
        assert_eq!(suits.len(), Suit::ALL.len());
        assert_eq!(pricing_tiers().iter().filter(|t| t.featured).count(), 1);
    }
}
