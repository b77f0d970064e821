// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalized representation of products in a wardrobe.

use serde::{Deserialize, Serialize};

/// Wardrobe category of a product.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "koszulki")]
    Koszulki,

    #[serde(rename = "bluzy")]
    Bluzy,

    #[serde(rename = "spodnie")]
    Spodnie,

    #[serde(rename = "skarpety")]
    Skarpety,

    #[serde(rename = "inne")]
    Inne,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] =
        [Self::Koszulki, Self::Bluzy, Self::Spodnie, Self::Skarpety, Self::Inne];

    /// Buckets a free-text passport category.
    ///
    /// Matching is case-insensitive and looks for English or Polish names anywhere in the text.
    #[must_use]
    pub fn from_passport_category(category: &str) -> Self {
        let category = category.to_lowercase();
        if category.contains("t-shirt") || category.contains("koszulka") {
            Self::Koszulki
        } else if category.contains("pants") || category.contains("spodnie") {
            Self::Spodnie
        } else if category.contains("hoodie") || category.contains("bluza") {
            Self::Bluzy
        } else if category.contains("sock") || category.contains("skarpet") {
            Self::Skarpety
        } else {
            Self::Inne
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Koszulki => "Koszulki",
            Self::Bluzy => "Bluzy",
            Self::Spodnie => "Spodnie",
            Self::Skarpety => "Skarpety",
            Self::Inne => "Inne",
        }
    }
}

/// Coarse rating bucket of an eco score.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EcoRating {
    #[serde(rename = "excellent")]
    Excellent,

    #[serde(rename = "good")]
    Good,

    #[serde(rename = "medium")]
    Medium,

    #[serde(rename = "poor")]
    Poor,

    #[serde(rename = "bad")]
    Bad,
}

impl EcoRating {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Medium,
            20..=39 => Self::Poor,
            _ => Self::Bad,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Doskonały",
            Self::Good => "Dobry",
            Self::Medium => "Średni",
            Self::Poor => "Słaby",
            Self::Bad => "Zły",
        }
    }
}

/// How much of a product can be recycled.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recyclability {
    #[serde(rename = "full")]
    Full,

    #[serde(rename = "partial")]
    Partial,

    #[serde(rename = "none")]
    None,
}

impl Recyclability {
    /// Derives the tier from the end-of-life recyclability percentage.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Full
        } else if percentage >= 40.0 {
            Self::Partial
        } else {
            Self::None
        }
    }

    #[must_use]
    pub fn is_recyclable(self) -> bool {
        self != Self::None
    }
}

/// Material of a product after classification.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: String,
    pub percentage: f64,
    pub is_natural: bool,
    pub is_recycled: bool,
}

/// Product as kept in a wardrobe.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: Category,

    #[serde(default)]
    pub image_url: String,

    pub materials: Vec<Material>,

    /// Eco score in range 0-100.
    pub eco_score: u8,

    pub eco_rating: EcoRating,

    /// Expected durability in wash cycles.
    pub durability: u32,

    /// Environmental impact index in range 1-10, lower is better.
    pub environmental_impact: u8,

    pub recyclability: Recyclability,
    pub repairable: bool,

    #[serde(default)]
    pub second_hand: bool,

    #[serde(default)]
    pub care_instructions: Vec<String>,

    #[serde(default)]
    pub facts: Vec<String>,
}

impl Product {
    /// Sum of the percentages of natural materials.
    #[must_use]
    pub fn natural_percentage(&self) -> f64 {
        self.materials.iter().filter(|m| m.is_natural).map(|m| m.percentage).sum()
    }

    /// Sum of the percentages of all materials.
    #[must_use]
    pub fn total_material_percentage(&self) -> f64 {
        self.materials.iter().map(|m| m.percentage).sum()
    }
}
