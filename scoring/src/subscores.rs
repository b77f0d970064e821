// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sub-score calculators.
//!
//! Each function maps one passport attribute to a signed number of points. Bands are checked
//! from the best to the worst and the first matching band wins.

use ecowardrobe_models::{
    passport::{MaterialEntry, RepairDifficulty},
    product::Category,
};

use crate::{
    materials::{self, MaterialClassifier},
    utils,
};

/// Points subtracted (before weighting) when hazardous substances are present.
pub const HAZARDOUS_SUBSTANCES_PENALTY: i32 = -20;

/// Points added (before weighting) when at least one material is certified.
pub const CERTIFICATIONS_BONUS: i32 = 10;

/// Typical carbon footprint of a product in the given category, in kg CO2e.
#[must_use]
pub fn carbon_threshold(category: Category) -> f64 {
    match category {
        Category::Koszulki => 3.0,
        Category::Skarpety => 2.0,
        Category::Spodnie | Category::Inne => 5.0,
        Category::Bluzy => 6.0,
    }
}

/// Scores the carbon footprint relative to what is typical for the category.
#[must_use]
pub fn carbon_footprint(carbon_footprint_kg_co2e: f64, category: Category) -> i32 {
    let carbon = utils::quantity(carbon_footprint_kg_co2e);
    let threshold = carbon_threshold(category);

    if carbon <= threshold * 0.5 {
        10
    } else if carbon <= threshold {
        5
    } else if carbon <= threshold * 1.5 {
        0
    } else if carbon <= threshold * 2.0 {
        -10
    } else if carbon <= threshold * 3.0 {
        -20
    } else {
        -30
    }
}

/// Sum of percentages of materials matching the predicate.
fn sum_percentage<F>(composition: &[MaterialEntry], predicate: F) -> f64
where
    F: Fn(&MaterialEntry) -> bool,
{
    composition.iter().filter(|m| predicate(m)).map(|m| utils::percentage(m.percentage)).sum()
}

/// Scores the recycled content.
///
/// The declared percentage is compared with the share of materials recognized as recycled and
/// the higher of the two is used. Certified recycled materials making up at least half of the
/// product earn an extra bonus.
#[must_use]
pub fn recycled_content(declared_percentage: f64, composition: &[MaterialEntry]) -> i32 {
    let detected = sum_percentage(composition, |m| {
        materials::is_recycled(&m.material, &m.certifications)
    });
    let effective = utils::percentage(declared_percentage).max(detected);

    let mut score = if effective >= 80.0 {
        15
    } else if effective >= 60.0 {
        12
    } else if effective >= 40.0 {
        8
    } else if effective >= 20.0 {
        4
    } else if effective > 0.0 {
        2
    } else {
        -10
    };

    let certified =
        sum_percentage(composition, |m| materials::has_recycled_certification(&m.certifications));
    if certified >= 50.0 {
        score += 5;
    }

    score
}

/// Scores the end-of-life recyclability.
#[must_use]
pub fn recyclability(recyclability_percentage: f64) -> i32 {
    let recyclability = utils::percentage(recyclability_percentage);
    if recyclability >= 90.0 {
        15
    } else if recyclability >= 70.0 {
        10
    } else if recyclability >= 50.0 {
        5
    } else if recyclability >= 30.0 {
        -5
    } else if recyclability >= 10.0 {
        -15
    } else {
        -25
    }
}

/// Bonus for products that are both made of and turn back into recycled material.
#[must_use]
pub fn recycling_synergy(recyclability_percentage: f64, recycled_content_percentage: f64) -> i32 {
    let recyclability = utils::percentage(recyclability_percentage);
    let recycled = utils::percentage(recycled_content_percentage);
    if recyclability >= 70.0 && recycled >= 50.0 {
        8
    } else if recyclability >= 50.0 && recycled >= 30.0 {
        4
    } else {
        0
    }
}

#[must_use]
pub fn hazardous_substances(substances: &[String]) -> i32 {
    if substances.is_empty() { 0 } else { HAZARDOUS_SUBSTANCES_PENALTY }
}

#[must_use]
pub fn repairability(difficulty: RepairDifficulty) -> i32 {
    match difficulty {
        RepairDifficulty::Low => 5,
        RepairDifficulty::High => -10,
        RepairDifficulty::Medium | RepairDifficulty::Unknown => 0,
    }
}

/// Scores the expected lifetime in wash cycles.
#[must_use]
pub fn durability(expected_lifetime_cycles: f64) -> i32 {
    let cycles = utils::quantity(expected_lifetime_cycles);
    if cycles >= 100.0 {
        8
    } else if cycles >= 70.0 {
        5
    } else if cycles >= 50.0 {
        2
    } else if cycles >= 30.0 {
        0
    } else if cycles >= 15.0 {
        -5
    } else {
        -10
    }
}

/// Scores the share of natural materials with an extra bonus for organic ones.
///
/// Natural share between 10% and 20% is neutral.
#[must_use]
pub fn natural_materials(composition: &[MaterialEntry], classifier: &MaterialClassifier) -> i32 {
    let natural = sum_percentage(composition, |m| classifier.is_natural(&m.material));
    let organic = sum_percentage(composition, |m| {
        classifier.is_natural(&m.material) && materials::is_organic(&m.material, &m.certifications)
    });

    let mut score = if natural >= 95.0 {
        15
    } else if natural >= 80.0 {
        12
    } else if natural >= 60.0 {
        8
    } else if natural >= 40.0 {
        4
    } else if natural >= 20.0 {
        1
    } else if natural < 10.0 {
        -8
    } else {
        0
    };

    if organic >= 50.0 {
        score += 5;
    } else if organic >= 30.0 {
        score += 3;
    } else if organic >= 10.0 {
        score += 1;
    }

    score
}

#[must_use]
pub fn certifications(composition: &[MaterialEntry]) -> i32 {
    if composition.iter().any(|m| !m.certifications.is_empty()) { CERTIFICATIONS_BONUS } else { 0 }
}
