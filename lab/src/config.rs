// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use crate::{commands, errors::ConfigCheckError, utils};

pub use commands::{Args, InputKind};

/// Sources of the scoring parameters.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct ScoringSourceConfig {
    /// Path to the scoring config.
    pub config_path: Option<PathBuf>,

    /// Path to the material keyword table.
    pub materials_path: Option<PathBuf>,
}

impl ScoringSourceConfig {
    pub fn new(args: &commands::ScoringArgs) -> Self {
        Self {
            config_path: args.config.as_ref().map(PathBuf::from),
            materials_path: args.materials.as_ref().map(PathBuf::from),
        }
    }

    /// Checks validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any of the given files does not exist.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        if let Some(path) = &self.config_path {
            utils::file_exists(path)?;
        }
        if let Some(path) = &self.materials_path {
            utils::file_exists(path)?;
        }
        Ok(())
    }
}

/// Configuration for the `score` command.
#[must_use]
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Path to the input passport.
    pub passport_path: PathBuf,

    /// The input is a backend product record.
    pub backend: bool,

    /// Scoring parameters.
    pub scoring: ScoringSourceConfig,

    /// Path to the output file.
    pub output_path: Option<PathBuf>,
}

impl ScoreConfig {
    /// Constructs a new `ScoreConfig`.
    pub fn new(args: &commands::ScoreArgs) -> ScoreConfig {
        Self {
            passport_path: PathBuf::from(&args.passport),
            backend: args.backend,
            scoring: ScoringSourceConfig::new(&args.scoring),
            output_path: args.output.as_ref().map(PathBuf::from),
        }
    }

    /// Checks validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if paths expected to exist do not exist or the output cannot be created.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        utils::file_exists(&self.passport_path)?;
        self.scoring.check()?;
        if let Some(path) = &self.output_path {
            utils::file_exists_or_creatable(path)?;
        }
        Ok(())
    }
}

/// Configuration for the `wardrobe` command.
#[must_use]
#[derive(Debug, Clone)]
pub struct WardrobeConfig {
    /// Path to the input JSON Lines file.
    pub input_path: PathBuf,

    /// Kind of the input records.
    pub kind: InputKind,

    /// Scoring parameters.
    pub scoring: ScoringSourceConfig,

    /// Path to the output file.
    pub output_path: Option<PathBuf>,
}

impl WardrobeConfig {
    /// Constructs a new `WardrobeConfig`.
    pub fn new(args: &commands::WardrobeArgs) -> WardrobeConfig {
        Self {
            input_path: PathBuf::from(&args.input),
            kind: args.kind,
            scoring: ScoringSourceConfig::new(&args.scoring),
            output_path: args.output.as_ref().map(PathBuf::from),
        }
    }

    /// Checks validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if paths expected to exist do not exist or the output cannot be created.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        utils::file_exists(&self.input_path)?;
        self.scoring.check()?;
        if let Some(path) = &self.output_path {
            utils::file_exists_or_creatable(path)?;
        }
        Ok(())
    }
}

/// Configuration of the program.
#[must_use]
#[derive(Debug, Clone)]
pub enum Config {
    Score(ScoreConfig),
    Wardrobe(WardrobeConfig),
}

impl Config {
    /// Constructs a new config from parsed arguments.
    pub fn new(args: &Args) -> Config {
        match &args.command {
            commands::Commands::Score(args) => Config::Score(ScoreConfig::new(args)),
            commands::Commands::Wardrobe(args) => Config::Wardrobe(WardrobeConfig::new(args)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_score_args() {
        let args = Args::parse_from([
            "ecowardrobe-lab",
            "score",
            "--passport",
            "tshirt.json",
            "--backend",
            "--materials",
            "materials.yaml",
        ]);
        assert_eq!(args.log_level, log::LevelFilter::Info);

        let Config::Score(config) = Config::new(&args) else {
            panic!("Expected the score config");
        };
        assert_eq!(config.passport_path, PathBuf::from("tshirt.json"));
        assert!(config.backend);
        assert_eq!(config.scoring.config_path, None);
        assert_eq!(config.scoring.materials_path, Some(PathBuf::from("materials.yaml")));
        assert_eq!(config.output_path, None);
    }

    #[test]
    fn test_wardrobe_args() {
        let args = Args::parse_from([
            "ecowardrobe-lab",
            "wardrobe",
            "--input",
            "wardrobe.jsonl",
            "--kind",
            "products",
            "--output",
            "stats.json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.log_level, log::LevelFilter::Debug);

        let Config::Wardrobe(config) = Config::new(&args) else {
            panic!("Expected the wardrobe config");
        };
        assert_eq!(config.input_path, PathBuf::from("wardrobe.jsonl"));
        assert_eq!(config.kind, InputKind::Products);
        assert_eq!(config.output_path, Some(PathBuf::from("stats.json")));
    }

    #[test]
    fn test_check_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = WardrobeConfig {
            input_path: dir.path().join("wardrobe.jsonl"),
            kind: InputKind::Passports,
            scoring: ScoringSourceConfig::default(),
            output_path: None,
        };
        assert!(matches!(config.check(), Err(ConfigCheckError::DoesNotExist(_))));

        std::fs::write(&config.input_path, "").unwrap();
        assert!(config.check().is_ok());

        let config = WardrobeConfig {
            scoring: ScoringSourceConfig {
                config_path: Some(dir.path().join("scoring.yaml")),
                materials_path: None,
            },
            ..config
        };
        assert!(matches!(config.check(), Err(ConfigCheckError::DoesNotExist(_))));
    }
}
