// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion of passports into wardrobe products.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use ecowardrobe_models::{
    passport::{Passport, PassportDocument, RepairDifficulty},
    product::{Category, EcoRating, Product, Recyclability},
};

use crate::{
    score::{ScoreBreakdown, Scorer},
    utils,
};

/// Product derived from a passport together with the data it was derived from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConvertedProduct {
    #[serde(rename = "product")]
    pub product: Product,

    #[serde(rename = "passport")]
    pub passport: Passport,

    #[serde(rename = "breakdown")]
    pub breakdown: ScoreBreakdown,
}

/// Environmental impact index in range 1-10 (lower is better), half a point per kg CO2e.
#[must_use]
pub fn environmental_impact_index(carbon_footprint_kg_co2e: f64) -> u8 {
    utils::round_clamped(utils::quantity(carbon_footprint_kg_co2e) / 2.0, 1, 10)
}

/// Generates human-readable facts about the product.
///
/// The order is fixed: carbon footprint, water usage, energy, recycled content, spare parts,
/// certifications and production countries. The optional facts are skipped when not applicable.
#[must_use]
pub fn generate_facts(passport: &Passport) -> Vec<String> {
    let impact = &passport.environmental_impact;
    let mut facts = vec![
        format!("Ślad węglowy: {:.1} kg CO₂e", utils::quantity(impact.carbon_footprint_kg_co2e)),
        format!("Zużycie wody: {} litrów", utils::quantity(impact.water_usage_liters)),
        format!("Zużycie energii: {:.1} kWh", utils::quantity(impact.energy_kwh)),
    ];

    let recycled = utils::percentage(impact.recycled_content_percentage);
    if recycled > 0.0 {
        facts.push(format!("Zawiera {recycled}% materiałów z recyklingu"));
    }

    if passport.durability_and_care.repairability.spare_parts_available {
        facts.push("Dostępne części zamienne".to_string());
    }

    let certifications = passport
        .material_composition
        .iter()
        .flat_map(|m| m.certifications.iter())
        .unique()
        .join(", ");
    if !certifications.is_empty() {
        facts.push(format!("Certyfikaty: {certifications}"));
    }

    let countries = passport.manufacturing.production_sites.iter().map(|s| &s.country).join(", ");
    facts.push(format!("Wyprodukowano w: {countries}"));

    facts
}

/// Converts passports into products.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Normalizer {
    scorer: Scorer,
}

impl Normalizer {
    #[must_use]
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    #[must_use]
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Derives a product from the passport.
    #[must_use]
    pub fn to_product(&self, passport: &Passport) -> Product {
        self.product_with_breakdown(passport).0
    }

    /// Unwraps the passport document and derives a product from it.
    #[must_use]
    pub fn convert(&self, document: impl Into<PassportDocument>) -> ConvertedProduct {
        let passport = document.into().into_passport();
        let (product, breakdown) = self.product_with_breakdown(&passport);
        ConvertedProduct { product, passport, breakdown }
    }

    fn product_with_breakdown(&self, passport: &Passport) -> (Product, ScoreBreakdown) {
        let breakdown = self.scorer.breakdown(passport);
        let eco_score = breakdown.final_score;
        let classifier = self.scorer.classifier();
        let care = &passport.durability_and_care;

        let product = Product {
            id: passport.product.product_id.clone(),
            name: passport.product.name.clone(),
            brand: passport.product.brand.clone(),
            category: Category::from_passport_category(&passport.product.category),
            image_url: String::new(),
            materials: passport
                .material_composition
                .iter()
                .map(|entry| classifier.material(entry))
                .collect(),
            eco_score,
            eco_rating: EcoRating::from_score(eco_score),
            durability: utils::round_to_u32(care.expected_lifetime_cycles),
            environmental_impact: environmental_impact_index(
                passport.environmental_impact.carbon_footprint_kg_co2e,
            ),
            recyclability: Recyclability::from_percentage(utils::percentage(
                passport.end_of_life.recyclability_percentage,
            )),
            repairable: care.repairability.repair_difficulty != RepairDifficulty::High,
            second_hand: false,
            care_instructions: vec![care.wash_instructions.clone()],
            facts: generate_facts(passport),
        };
        (product, breakdown)
    }
}

/// Converts a passport document into a product using the default configuration.
#[must_use]
pub fn to_product(document: impl Into<PassportDocument>) -> ConvertedProduct {
    Normalizer::default().convert(document)
}
