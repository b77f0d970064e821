// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use pretty_assertions::assert_eq;

use ecowardrobe_models::{
    backend::BackendProduct,
    passport::{MaterialEntry, Passport, PassportDocument},
    product::{Category, EcoRating, Material, Product, Recyclability},
};
use ecowardrobe_scoring::{
    ScoringConfig,
    materials::{MaterialTable, UnknownMaterialPolicy},
    normalize,
};

fn document(json: &str) -> PassportDocument {
    serde_json::from_str(json).unwrap()
}

fn expected_tshirt() -> Product {
    Product {
        id: "urn:eprel:123456789".to_string(),
        name: "Koszulka bawełniana Basic".to_string(),
        brand: "EcoWear".to_string(),
        category: Category::Koszulki,
        image_url: String::new(),
        materials: vec![
            Material {
                name: "Cotton".to_string(),
                percentage: 95.0,
                is_natural: true,
                is_recycled: false,
            },
            Material {
                name: "Elastane".to_string(),
                percentage: 5.0,
                is_natural: false,
                is_recycled: false,
            },
        ],
        eco_score: 97,
        eco_rating: EcoRating::Excellent,
        durability: 50,
        environmental_impact: 1,
        recyclability: Recyclability::Full,
        repairable: true,
        second_hand: false,
        care_instructions: vec!["30°C, delikatne pranie".to_string()],
        facts: vec![
            "Ślad węglowy: 2.4 kg CO₂e".to_string(),
            "Zużycie wody: 1200 litrów".to_string(),
            "Zużycie energii: 1.1 kWh".to_string(),
            "Dostępne części zamienne".to_string(),
            "Certyfikaty: GOTS, Organic 100".to_string(),
            "Wyprodukowano w: Italy, Turkey".to_string(),
        ],
    }
}

#[test]
fn tshirt_passport_to_product() {
    let converted = normalize::to_product(document(include_str!("data/basic_tshirt.json")));
    assert_eq!(converted.product, expected_tshirt());
    assert_eq!(converted.breakdown.final_score, 97);
    assert_eq!(converted.passport.product.gtin, "5901234123457");
}

#[test]
fn hoodie_passport_to_product() {
    let product =
        normalize::to_product(document(include_str!("data/polyester_hoodie.json"))).product;

    assert_eq!(product.category, Category::Bluzy);
    assert_eq!(product.eco_score, 0);
    assert_eq!(product.eco_rating, EcoRating::Bad);
    assert_eq!(product.durability, 15);
    assert_eq!(product.environmental_impact, 6);
    assert_eq!(product.recyclability, Recyclability::None);
    assert!(!product.repairable);
    assert_eq!(
        product.facts,
        vec![
            "Ślad węglowy: 12.5 kg CO₂e".to_string(),
            "Zużycie wody: 300 litrów".to_string(),
            "Zużycie energii: 8.3 kWh".to_string(),
            "Wyprodukowano w: Bangladesh".to_string(),
        ]
    );
}

#[test]
fn all_document_shapes_give_the_same_product() {
    let wrapped = document(include_str!("data/basic_tshirt.json"));
    let passport = wrapped.clone().into_passport();
    let record = PassportDocument::Record {
        record: ecowardrobe_models::passport::WrappedPassport {
            product_passport: passport.clone(),
        },
    };
    let bare = PassportDocument::Bare(passport.clone());

    let expected = expected_tshirt();
    assert_eq!(normalize::to_product(wrapped).product, expected);
    assert_eq!(normalize::to_product(record).product, expected);
    assert_eq!(normalize::to_product(bare).product, expected);
    assert_eq!(normalize::to_product(passport).product, expected);
}

#[test]
fn backend_product_to_product() {
    let backend: BackendProduct =
        serde_json::from_str(include_str!("data/backend_product.json")).unwrap();
    let converted = normalize::to_product(backend.into_passport());
    assert_eq!(converted.product, expected_tshirt());
}

/// Replaces empty values of the test documents with `null`.
fn with_nulls(json: &str) -> String {
    let replaced = json
        .replace(r#""hazardousSubstances": []"#, r#""hazardousSubstances": null"#)
        .replace(r#""recycledContentPercentage": 0,"#, r#""recycledContentPercentage": null,"#);
    assert_ne!(replaced, json);
    replaced
}

#[test]
fn null_fields_score_like_missing_ones() {
    let converted = normalize::to_product(document(&with_nulls(include_str!(
        "data/basic_tshirt.json"
    ))));
    assert_eq!(converted.product, expected_tshirt());
    assert_eq!(converted.breakdown.final_score, 97);

    let backend: BackendProduct =
        serde_json::from_str(&with_nulls(include_str!("data/backend_product.json"))).unwrap();
    assert_eq!(normalize::to_product(backend.into_passport()).product, expected_tshirt());
}

#[test]
fn malformed_inner_passport_is_an_error() {
    let malformed = include_str!("data/basic_tshirt.json")
        .replace(r#""hazardousSubstances": []"#, r#""hazardousSubstances": "none""#);
    assert!(serde_json::from_str::<PassportDocument>(&malformed).is_err());

    let backend = r#"{ "id": "1", "productInformation": { "productName": "Koszulka" } }"#;
    assert!(serde_json::from_str::<PassportDocument>(backend).is_err());
}

#[test]
fn recycled_polyester_is_recycled_synthetic() {
    let mut passport = Passport::default();
    passport.material_composition = vec![MaterialEntry::new("Recycled Polyester", 100.0, &[])];

    let product = normalize::to_product(passport).product;
    assert_eq!(
        product.materials,
        vec![Material {
            name: "Recycled Polyester".to_string(),
            percentage: 100.0,
            is_natural: false,
            is_recycled: true,
        }]
    );
}

#[test]
fn certifications_are_deduplicated_in_order() {
    let mut passport = Passport::default();
    passport.material_composition = vec![
        MaterialEntry::new("Recycled Polyester", 60.0, &["GRS", "OEKO-TEX"]),
        MaterialEntry::new("Cotton", 40.0, &["OEKO-TEX", "GOTS"]),
    ];
    passport.environmental_impact.recycled_content_percentage = 60.0;

    let facts = normalize::generate_facts(&passport);
    assert_eq!(facts[3], "Zawiera 60% materiałów z recyklingu");
    assert_eq!(facts[4], "Certyfikaty: GRS, OEKO-TEX, GOTS");
}

#[test]
fn malformed_numbers_are_sanitized() {
    let mut passport = Passport::default();
    passport.material_composition = vec![MaterialEntry::new("Cotton", 140.0, &[])];
    passport.environmental_impact.carbon_footprint_kg_co2e = -3.0;
    passport.end_of_life.recyclability_percentage = f64::NAN;
    passport.durability_and_care.expected_lifetime_cycles = -10.0;

    let product = normalize::to_product(passport).product;
    assert_eq!(product.materials[0].percentage, 100.0);
    assert_eq!(product.environmental_impact, 1);
    assert_eq!(product.recyclability, Recyclability::None);
    assert_eq!(product.durability, 0);
}

#[test]
fn config_selects_unknown_material_policy() {
    let config = ScoringConfig {
        unknown_materials: UnknownMaterialPolicy::Natural,
        ..ScoringConfig::default()
    };
    let mut passport = Passport::default();
    passport.material_composition = vec![MaterialEntry::new("Piñatex", 100.0, &[])];

    let open = config.normalizer(MaterialTable::default()).to_product(&passport);
    let closed = normalize::to_product(passport).product;

    assert!(open.materials[0].is_natural);
    assert!(!closed.materials[0].is_natural);
    assert!(open.eco_score > closed.eco_score);
}

#[test]
fn product_serialization() {
    let product =
        normalize::to_product(document(include_str!("data/polyester_hoodie.json"))).product;
    let json = serde_json::to_value(&product).unwrap();

    assert_eq!(json["category"], "bluzy");
    assert_eq!(json["ecoScore"], 0);
    assert_eq!(json["ecoRating"], "bad");
    assert_eq!(json["recyclability"], "none");
    assert_eq!(json["environmentalImpact"], 6);
    assert_eq!(json["materials"][0]["isNatural"], false);

    let parsed: Product = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, product);
}
