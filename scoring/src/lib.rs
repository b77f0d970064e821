// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod errors;
pub mod materials;
pub mod normalize;
pub mod score;
pub mod subscores;
pub mod utils;
pub mod wardrobe;

pub use crate::{
    config::ScoringConfig,
    materials::{MaterialClassifier, MaterialTable},
    normalize::{ConvertedProduct, Normalizer},
    score::{EcoScoreWeights, ScoreBreakdown, Scorer},
    wardrobe::{NaturalMaterialAggregation, WardrobeAggregator},
};
