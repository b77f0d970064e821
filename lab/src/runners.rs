// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use ecowardrobe_models::{
    backend::BackendProduct, passport::PassportDocument, product::Product, stats::WardrobeStats,
};
use ecowardrobe_scoring::{MaterialTable, Normalizer, ScoreBreakdown, ScoringConfig};

use crate::{
    config::{InputKind, ScoreConfig, ScoringSourceConfig, WardrobeConfig},
    errors::{MapIo, MapSerde, ProcessingError},
};

/// Result of the `score` command.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoreReport {
    #[serde(rename = "product")]
    pub product: Product,

    #[serde(rename = "breakdown")]
    pub breakdown: ScoreBreakdown,
}

/// Loads the scoring config and the material table, falling back to the defaults.
fn load_scoring(
    config: &ScoringSourceConfig,
) -> Result<(ScoringConfig, MaterialTable), ProcessingError> {
    let scoring = if let Some(path) = &config.config_path {
        let contents = std::fs::read_to_string(path).map_with_path(path)?;
        ScoringConfig::from_yaml(&contents)
            .map_err(|e| ProcessingError::ScoringConfig(e, path.clone()))?
    } else {
        ScoringConfig::default()
    };

    let table = if let Some(path) = &config.materials_path {
        let contents = std::fs::read_to_string(path).map_with_path(path)?;
        let table = MaterialTable::from_yaml(&contents)
            .map_err(|e| ProcessingError::MaterialTable(e, path.clone()))?;
        log::info!("Loaded material table version {} from {}", table.version(), path.display());
        table
    } else {
        MaterialTable::default()
    };

    Ok((scoring, table))
}

/// Reads a JSON Lines file. Lines which cannot be parsed are skipped.
fn read_json_lines<T>(path: &Path) -> Result<Vec<T>, ProcessingError>
where
    T: DeserializeOwned,
{
    let mut items = Vec::new();
    let mut skipped: usize = 0;
    for (index, line) in serde_jsonlines::json_lines(path).map_with_path(path)?.enumerate() {
        match line {
            Ok(item) => items.push(item),
            // Parsing errors, including truncated and blank lines.
            Err(err)
                if matches!(
                    err.kind(),
                    std::io::ErrorKind::InvalidData | std::io::ErrorKind::UnexpectedEof
                ) =>
            {
                log::warn!("Skipping line {} of {}: {err}", index + 1, path.display());
                skipped += 1;
            }
            Err(err) => return Err(ProcessingError::Io(err, path.to_owned())),
        }
    }
    if skipped > 0 {
        log::warn!("Skipped {skipped} of {} lines", items.len() + skipped);
    }
    Ok(items)
}

/// Writes the result as pretty JSON to the file or to the standard output.
fn write_output<T>(path: Option<&Path>, value: &T) -> Result<(), ProcessingError>
where
    T: Serialize,
{
    let contents = serde_json::to_string_pretty(value).map_serde()?;
    if let Some(path) = path {
        std::fs::write(path, contents).map_with_path(path)?;
        log::info!("Result written to {}", path.display());
    } else {
        println!("{contents}");
    }
    Ok(())
}

pub struct ScoreRunner;

impl ScoreRunner {
    /// Scores the passport pointed to by the config.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the files cannot be read or parsed.
    pub fn score(config: &ScoreConfig) -> Result<ScoreReport, ProcessingError> {
        let (scoring, table) = load_scoring(&config.scoring)?;
        let normalizer = scoring.normalizer(table);

        let path = &config.passport_path;
        let contents = std::fs::read_to_string(path).map_with_path(path)?;
        let document: PassportDocument = if config.backend {
            let product: BackendProduct = serde_json::from_str(&contents).map_with_path(path)?;
            product.into_passport().into()
        } else {
            serde_json::from_str(&contents).map_with_path(path)?
        };

        let converted = normalizer.convert(document);
        log::info!(
            "Product `{}` scored {} ({})",
            converted.product.id,
            converted.product.eco_score,
            converted.product.eco_rating.label(),
        );
        Ok(ScoreReport { product: converted.product, breakdown: converted.breakdown })
    }

    /// Runs the `score` command.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the files cannot be read, parsed or written.
    pub fn run(config: &ScoreConfig) -> Result<(), ProcessingError> {
        let report = Self::score(config)?;
        write_output(config.output_path.as_deref(), &report)
    }
}

pub struct WardrobeRunner;

impl WardrobeRunner {
    /// Reads the products of the wardrobe, scoring them if needed.
    fn read_products(
        config: &WardrobeConfig,
        normalizer: &Normalizer,
    ) -> Result<Vec<Product>, ProcessingError> {
        let path = &config.input_path;
        let products = match config.kind {
            InputKind::Passports => read_json_lines::<PassportDocument>(path)?
                .into_iter()
                .map(|document| normalizer.to_product(&document.into_passport()))
                .collect(),
            InputKind::Backend => read_json_lines::<BackendProduct>(path)?
                .into_iter()
                .map(|product| normalizer.to_product(&product.into_passport()))
                .collect(),
            InputKind::Products => read_json_lines::<Product>(path)?,
        };
        log::info!("Read {} products", products.len());
        Ok(products)
    }

    /// Computes statistics of the wardrobe pointed to by the config.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the files cannot be read or the configs cannot be parsed.
    pub fn stats(config: &WardrobeConfig) -> Result<WardrobeStats, ProcessingError> {
        let (scoring, table) = load_scoring(&config.scoring)?;
        let products = Self::read_products(config, &scoring.normalizer(table))?;
        Ok(scoring.aggregator().aggregate(&products))
    }

    /// Runs the `wardrobe` command.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the files cannot be read, parsed or written.
    pub fn run(config: &WardrobeConfig) -> Result<(), ProcessingError> {
        let stats = Self::stats(config)?;
        write_output(config.output_path.as_deref(), &stats)
    }
}
