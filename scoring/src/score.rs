// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use snafu::prelude::*;

use ecowardrobe_models::{passport::Passport, product::Category};

use crate::{
    errors::{ConfigError, InvalidWeightSnafu},
    materials::MaterialClassifier,
    subscores, utils,
};

/// Score of a product with no merits and no flaws.
pub const BASELINE: f64 = 50.0;

/// Multipliers applied to the sub-scores.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EcoScoreWeights {
    pub carbon_footprint: f64,
    pub recycled_content: f64,
    pub recyclability: f64,
    pub hazardous_substances: f64,
    pub repairability: f64,
    pub certifications: f64,
    pub durability: f64,
    pub natural_materials: f64,
}

impl Default for EcoScoreWeights {
    fn default() -> Self {
        Self {
            carbon_footprint: 1.0,
            recycled_content: 1.2,
            recyclability: 1.3,
            hazardous_substances: 1.5,
            repairability: 0.8,
            certifications: 0.7,
            durability: 0.6,
            natural_materials: 1.1,
        }
    }
}

impl EcoScoreWeights {
    fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("carbonFootprint", self.carbon_footprint),
            ("recycledContent", self.recycled_content),
            ("recyclability", self.recyclability),
            ("hazardousSubstances", self.hazardous_substances),
            ("repairability", self.repairability),
            ("certifications", self.certifications),
            ("durability", self.durability),
            ("naturalMaterials", self.natural_materials),
        ]
    }

    /// Checks that all the weights are usable numbers.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first weight which is NaN or infinite.
    pub fn check(&self) -> Result<(), ConfigError> {
        for (name, value) in self.named() {
            ensure!(value.is_finite(), InvalidWeightSnafu { name, value });
        }
        Ok(())
    }
}

/// Weighted contributions of every factor to a single score.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub carbon_score: f64,
    pub recycled_score: f64,
    pub recyclability_score: f64,
    pub synergy_bonus: f64,
    pub hazardous_substances: f64,
    pub repairability_score: f64,
    pub durability_score: f64,
    pub natural_materials_score: f64,
    pub certifications_bonus: f64,

    /// Sum of all the contributions before rounding and clamping.
    pub raw_total: f64,

    pub final_score: u8,
}

/// Computes eco scores of passports.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scorer {
    weights: EcoScoreWeights,
    classifier: MaterialClassifier,
}

impl Scorer {
    #[must_use]
    pub fn new(weights: EcoScoreWeights, classifier: MaterialClassifier) -> Self {
        Self { weights, classifier }
    }

    #[must_use]
    pub fn weights(&self) -> &EcoScoreWeights {
        &self.weights
    }

    #[must_use]
    pub fn classifier(&self) -> &MaterialClassifier {
        &self.classifier
    }

    /// Computes all weighted contributions and the final score.
    #[must_use]
    pub fn breakdown(&self, passport: &Passport) -> ScoreBreakdown {
        let w = &self.weights;
        let impact = &passport.environmental_impact;
        let composition = &passport.material_composition;
        let recyclability = passport.end_of_life.recyclability_percentage;
        let category = Category::from_passport_category(&passport.product.category);

        let carbon_score =
            f64::from(subscores::carbon_footprint(impact.carbon_footprint_kg_co2e, category))
                * w.carbon_footprint;
        let recycled_score = f64::from(subscores::recycled_content(
            impact.recycled_content_percentage,
            composition,
        )) * w.recycled_content;
        let recyclability_score =
            f64::from(subscores::recyclability(recyclability)) * w.recyclability;
        let synergy_bonus = f64::from(subscores::recycling_synergy(
            recyclability,
            impact.recycled_content_percentage,
        ));
        let hazardous_substances =
            f64::from(subscores::hazardous_substances(&impact.hazardous_substances))
                * w.hazardous_substances;
        let repairability_score = f64::from(subscores::repairability(
            passport.durability_and_care.repairability.repair_difficulty,
        )) * w.repairability;
        let durability_score =
            f64::from(subscores::durability(passport.durability_and_care.expected_lifetime_cycles))
                * w.durability;
        let natural_materials_score =
            f64::from(subscores::natural_materials(composition, &self.classifier))
                * w.natural_materials;
        let certifications_bonus =
            f64::from(subscores::certifications(composition)) * w.certifications;

        let raw_total = BASELINE
            + carbon_score
            + recycled_score
            + recyclability_score
            + synergy_bonus
            + hazardous_substances
            + repairability_score
            + durability_score
            + natural_materials_score
            + certifications_bonus;
        let final_score = utils::round_clamped(raw_total, 0, 100);

        let breakdown = ScoreBreakdown {
            base_score: BASELINE,
            carbon_score,
            recycled_score,
            recyclability_score,
            synergy_bonus,
            hazardous_substances,
            repairability_score,
            durability_score,
            natural_materials_score,
            certifications_bonus,
            raw_total,
            final_score,
        };
        log::debug!("Eco score breakdown for `{}`: {breakdown:?}", passport.product.name);
        breakdown
    }

    /// Computes the eco score in range 0-100.
    #[must_use]
    pub fn score(&self, passport: &Passport) -> u8 {
        self.breakdown(passport).final_score
    }
}

/// Computes the eco score of a passport with the built-in material table.
#[must_use]
pub fn calculate(passport: &Passport, weights: &EcoScoreWeights) -> u8 {
    Scorer::new(*weights, MaterialClassifier::default()).score(passport)
}
