// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use maplit::btreemap;
use pretty_assertions::assert_eq;

use ecowardrobe_models::{
    product::{Category, EcoRating, Material, Product, Recyclability},
    stats::{CategoryStats, WardrobeStats},
};
use ecowardrobe_scoring::wardrobe::{self, NaturalMaterialAggregation, WardrobeAggregator};

fn material(name: &str, percentage: f64, is_natural: bool) -> Material {
    Material { name: name.to_string(), percentage, is_natural, is_recycled: false }
}

fn product(
    category: Category,
    eco_score: u8,
    materials: Vec<Material>,
    recyclability: Recyclability,
    repairable: bool,
    durability: u32,
) -> Product {
    Product {
        id: format!("{category:?}-{eco_score}"),
        name: String::new(),
        brand: String::new(),
        category,
        image_url: String::new(),
        materials,
        eco_score,
        eco_rating: EcoRating::from_score(eco_score),
        durability,
        environmental_impact: 1,
        recyclability,
        repairable,
        second_hand: false,
        care_instructions: Vec::new(),
        facts: Vec::new(),
    }
}

#[test]
fn empty_wardrobe() {
    let stats = wardrobe::aggregate(&[]);
    assert_eq!(stats, WardrobeStats::empty());
    assert_eq!(stats.avg_eco_score, 0);
    assert_eq!(stats.natural_materials_percent, 0);
    assert_eq!(stats.synthetic_materials_percent, 0);
    assert_eq!(stats.category_stats.len(), 5);
    assert!(stats.category_stats.values().all(|c| *c == CategoryStats::default()));

    let global = WardrobeAggregator::new(NaturalMaterialAggregation::GlobalPool);
    assert_eq!(global.aggregate(&[]), WardrobeStats::empty());
}

#[test]
fn wardrobe_statistics() {
    let products = vec![
        product(
            Category::Koszulki,
            97,
            vec![material("Cotton", 95.0, true), material("Elastane", 5.0, false)],
            Recyclability::Full,
            true,
            50,
        ),
        product(
            Category::Bluzy,
            0,
            vec![material("Polyester", 100.0, false)],
            Recyclability::None,
            false,
            15,
        ),
        product(
            Category::Koszulki,
            64,
            vec![material("Recycled Polyester", 100.0, false)],
            Recyclability::Partial,
            true,
            100,
        ),
    ];

    let expected = WardrobeStats {
        total_items: 3,
        avg_eco_score: 54,
        eco_products_percent: 67,
        natural_materials_percent: 32,
        synthetic_materials_percent: 68,
        recyclable_percent: 67,
        repairable_percent: 67,
        avg_durability: 55,
        category_stats: btreemap! {
            Category::Koszulki => CategoryStats { count: 2, avg_eco_score: 81 },
            Category::Bluzy => CategoryStats { count: 1, avg_eco_score: 0 },
            Category::Spodnie => CategoryStats::default(),
            Category::Skarpety => CategoryStats::default(),
            Category::Inne => CategoryStats::default(),
        },
    };

    assert_eq!(wardrobe::aggregate(&products), expected);
}

#[test]
fn natural_share_per_product_average() {
    let products = vec![
        product(
            Category::Inne,
            50,
            vec![material("Linen", 100.0, true)],
            Recyclability::Full,
            true,
            30,
        ),
        product(
            Category::Inne,
            50,
            vec![material("Nylon", 100.0, false)],
            Recyclability::Full,
            true,
            30,
        ),
    ];

    let stats = wardrobe::aggregate(&products);
    assert_eq!(stats.natural_materials_percent, 50);
    assert_eq!(stats.synthetic_materials_percent, 50);
}

#[test]
fn natural_share_depends_on_aggregation() {
    // The second product declares only 60% of its composition.
    let products = vec![
        product(
            Category::Spodnie,
            70,
            vec![material("Cotton", 100.0, true)],
            Recyclability::Partial,
            true,
            60,
        ),
        product(
            Category::Spodnie,
            30,
            vec![material("Polyester", 60.0, false)],
            Recyclability::None,
            true,
            20,
        ),
    ];

    let per_product = WardrobeAggregator::new(NaturalMaterialAggregation::PerProductAverage);
    let global = WardrobeAggregator::new(NaturalMaterialAggregation::GlobalPool);

    let stats = per_product.aggregate(&products);
    assert_eq!(stats.natural_materials_percent, 50);
    assert_eq!(stats.synthetic_materials_percent, 50);

    let stats = global.aggregate(&products);
    assert_eq!(stats.natural_materials_percent, 63);
    assert_eq!(stats.synthetic_materials_percent, 37);
}

#[test]
fn natural_and_synthetic_complement() {
    let compositions = [
        vec![],
        vec![material("Cotton", 100.0, true)],
        vec![material("Cotton", 130.0, true)],
        vec![material("Wool", 33.0, true), material("Acrylic", 67.0, false)],
        vec![material("Viscose", 12.5, true)],
    ];

    for aggregation in
        [NaturalMaterialAggregation::PerProductAverage, NaturalMaterialAggregation::GlobalPool]
    {
        let aggregator = WardrobeAggregator::new(aggregation);
        for first in &compositions {
            for second in &compositions {
                let products = vec![
                    product(Category::Inne, 10, first.clone(), Recyclability::None, false, 0),
                    product(Category::Inne, 90, second.clone(), Recyclability::Full, true, 0),
                ];
                let stats = aggregator.aggregate(&products);
                assert_eq!(
                    stats.natural_materials_percent + stats.synthetic_materials_percent,
                    100
                );
            }
        }
    }
}

#[test]
fn aggregation_is_idempotent() {
    let products = vec![product(
        Category::Skarpety,
        42,
        vec![material("Bamboo", 80.0, true), material("Elastane", 20.0, false)],
        Recyclability::Partial,
        true,
        24,
    )];
    assert_eq!(wardrobe::aggregate(&products), wardrobe::aggregate(&products));
}

#[test]
fn stats_serialization() {
    let json = serde_json::to_value(WardrobeStats::empty()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "totalItems": 0,
            "avgEcoScore": 0,
            "ecoProductsPercent": 0,
            "naturalMaterialsPercent": 0,
            "syntheticMaterialsPercent": 0,
            "recyclablePercent": 0,
            "repairablePercent": 0,
            "avgDurability": 0,
            "categoryStats": {
                "koszulki": { "count": 0, "avgEcoScore": 0 },
                "bluzy": { "count": 0, "avgEcoScore": 0 },
                "spodnie": { "count": 0, "avgEcoScore": 0 },
                "skarpety": { "count": 0, "avgEcoScore": 0 },
                "inne": { "count": 0, "avgEcoScore": 0 },
            },
        })
    );
}
