// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use crate::{
    errors::ConfigError,
    materials::{MaterialClassifier, MaterialTable, UnknownMaterialPolicy},
    normalize::Normalizer,
    score::{EcoScoreWeights, Scorer},
    wardrobe::{NaturalMaterialAggregation, WardrobeAggregator},
};

/// Tunable parameters of the engine.
///
/// Every field is optional in the YAML form and falls back to the defaults used for all the
/// already scored data.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    pub weights: EcoScoreWeights,
    pub unknown_materials: UnknownMaterialPolicy,
    pub natural_material_aggregation: NaturalMaterialAggregation,
}

impl ScoringConfig {
    /// Parses the config from its YAML form.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or any of the weights is not a finite number.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.weights.check()?;
        Ok(config)
    }

    #[must_use]
    pub fn scorer(&self, table: MaterialTable) -> Scorer {
        Scorer::new(self.weights, MaterialClassifier::new(table, self.unknown_materials))
    }

    #[must_use]
    pub fn normalizer(&self, table: MaterialTable) -> Normalizer {
        Normalizer::new(self.scorer(table))
    }

    #[must_use]
    pub fn aggregator(&self) -> WardrobeAggregator {
        WardrobeAggregator::new(self.natural_material_aggregation)
    }
}
