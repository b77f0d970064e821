// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statistics of a whole wardrobe.

use serde::{Deserialize, Serialize};

use ecowardrobe_models::{
    product::{Category, Product},
    stats::{CategoryStats, WardrobeStats},
};

use crate::utils;

/// Products with at least this score count as eco products.
pub const ECO_PRODUCT_MIN_SCORE: u8 = 60;

/// How the natural-material share of a wardrobe is computed.
///
/// The two ways are not equivalent when the material percentages of products do not add up to
/// the same total.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NaturalMaterialAggregation {
    /// Mean of the natural-material percentages of individual products.
    #[default]
    #[serde(rename = "per-product-average")]
    PerProductAverage,

    /// Natural-material percentages of all products divided by all material percentages.
    #[serde(rename = "global-pool")]
    GlobalPool,
}

impl NaturalMaterialAggregation {
    /// Natural-material share of the products, in range 0-100.
    #[must_use]
    pub fn natural_percentage(self, products: &[Product]) -> f64 {
        let share = match self {
            Self::PerProductAverage => mean(products.iter().map(Product::natural_percentage)),
            Self::GlobalPool => {
                let natural: f64 = products.iter().map(Product::natural_percentage).sum();
                let total: f64 = products.iter().map(Product::total_material_percentage).sum();
                if total > 0.0 { natural / total * 100.0 } else { 0.0 }
            }
        };
        utils::percentage(share)
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean<I>(values: I) -> f64
where
    I: ExactSizeIterator<Item = f64>,
{
    let len = values.len();
    if len == 0 { 0.0 } else { values.sum::<f64>() / len as f64 }
}

/// Computes statistics of a wardrobe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WardrobeAggregator {
    natural: NaturalMaterialAggregation,
}

impl WardrobeAggregator {
    #[must_use]
    pub fn new(natural: NaturalMaterialAggregation) -> Self {
        Self { natural }
    }

    #[must_use]
    pub fn natural_material_aggregation(&self) -> NaturalMaterialAggregation {
        self.natural
    }

    /// Computes statistics of the given products.
    ///
    /// An empty wardrobe yields all-zero statistics.
    #[must_use]
    pub fn aggregate(&self, products: &[Product]) -> WardrobeStats {
        if products.is_empty() {
            return WardrobeStats::empty();
        }

        let total = products.len();
        let natural_materials_percent =
            utils::round_to_u32(self.natural.natural_percentage(products)).min(100);

        let category_stats = Category::ALL
            .iter()
            .map(|category| {
                let scores: Vec<f64> = products
                    .iter()
                    .filter(|p| p.category == *category)
                    .map(|p| f64::from(p.eco_score))
                    .collect();
                let stats = CategoryStats {
                    count: count_to_u32(scores.len()),
                    avg_eco_score: utils::round_to_u32(mean(scores.into_iter())),
                };
                (*category, stats)
            })
            .collect();

        WardrobeStats {
            total_items: count_to_u32(total),
            avg_eco_score: utils::round_to_u32(mean(
                products.iter().map(|p| f64::from(p.eco_score)),
            )),
            eco_products_percent: utils::share(
                products.iter().filter(|p| p.eco_score >= ECO_PRODUCT_MIN_SCORE).count(),
                total,
            ),
            natural_materials_percent,
            synthetic_materials_percent: 100 - natural_materials_percent,
            recyclable_percent: utils::share(
                products.iter().filter(|p| p.recyclability.is_recyclable()).count(),
                total,
            ),
            repairable_percent: utils::share(
                products.iter().filter(|p| p.repairable).count(),
                total,
            ),
            avg_durability: utils::round_to_u32(mean(
                products.iter().map(|p| f64::from(p.durability)),
            )),
            category_stats,
        }
    }
}

fn count_to_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Computes statistics of a wardrobe averaging the natural-material share per product.
#[must_use]
pub fn aggregate(products: &[Product]) -> WardrobeStats {
    WardrobeAggregator::default().aggregate(products)
}
