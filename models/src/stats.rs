// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::product::Category;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub count: u32,
    pub avg_eco_score: u32,
}

/// Summary of a whole wardrobe.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeStats {
    pub total_items: u32,
    pub avg_eco_score: u32,
    pub eco_products_percent: u32,
    pub natural_materials_percent: u32,
    pub synthetic_materials_percent: u32,
    pub recyclable_percent: u32,
    pub repairable_percent: u32,
    pub avg_durability: u32,
    pub category_stats: BTreeMap<Category, CategoryStats>,
}

impl WardrobeStats {
    /// Statistics of an empty wardrobe: all values zero, every category present.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_items: 0,
            avg_eco_score: 0,
            eco_products_percent: 0,
            natural_materials_percent: 0,
            synthetic_materials_percent: 0,
            recyclable_percent: 0,
            repairable_percent: 0,
            avg_durability: 0,
            category_stats: Category::ALL
                .iter()
                .map(|category| (*category, CategoryStats::default()))
                .collect(),
        }
    }
}

impl Default for WardrobeStats {
    fn default() -> Self {
        Self::empty()
    }
}
