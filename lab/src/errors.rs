// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use ecowardrobe_scoring::errors::{ConfigError, TableError};

/// Error returned if config checking failed.
#[derive(Error, Debug)]
pub enum ConfigCheckError {
    #[error("Path '{0}' does not exist")]
    DoesNotExist(PathBuf),

    #[error("Path '{0}' is not a file")]
    NotAFile(PathBuf),

    #[error("Path '{0}' is not a directory")]
    NotADir(PathBuf),

    #[error("Path '{0}' has no parent")]
    NoParent(PathBuf),
}

/// Error returned when a problem with processing.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("In file `{1}`.\nIO error: {0}")]
    Io(std::io::Error, PathBuf),

    #[error("In file `{1}`.\nJSON parsing error: {0}")]
    ReadJson(serde_json::Error, PathBuf),

    #[error("In file `{1}`.\nScoring config error: {0}")]
    ScoringConfig(ConfigError, PathBuf),

    #[error("In file `{1}`.\nMaterial table error: {0}")]
    MaterialTable(TableError, PathBuf),

    #[error("JSON serialization error: {0}")]
    WriteJson(serde_json::Error),

    #[error("Config check: {0}")]
    ConfigCheck(#[from] ConfigCheckError),
}

/// Attaches a path to IO errors.
pub trait MapIo<T> {
    /// Converts the error into `ProcessingError::Io` with the given path.
    ///
    /// # Errors
    ///
    /// Returns the converted error if `self` was an error.
    fn map_with_path(self, path: &Path) -> Result<T, ProcessingError>;
}

impl<T> MapIo<T> for Result<T, std::io::Error> {
    fn map_with_path(self, path: &Path) -> Result<T, ProcessingError> {
        self.map_err(|e| ProcessingError::Io(e, path.to_owned()))
    }
}

/// Attaches context to JSON errors.
pub trait MapSerde<T> {
    /// Converts a parsing error into `ProcessingError::ReadJson` with the given path.
    ///
    /// # Errors
    ///
    /// Returns the converted error if `self` was an error.
    fn map_with_path(self, path: &Path) -> Result<T, ProcessingError>;

    /// Converts a serialization error into `ProcessingError::WriteJson`.
    ///
    /// # Errors
    ///
    /// Returns the converted error if `self` was an error.
    fn map_serde(self) -> Result<T, ProcessingError>;
}

impl<T> MapSerde<T> for Result<T, serde_json::Error> {
    fn map_with_path(self, path: &Path) -> Result<T, ProcessingError> {
        self.map_err(|e| ProcessingError::ReadJson(e, path.to_owned()))
    }

    fn map_serde(self) -> Result<T, ProcessingError> {
        self.map_err(ProcessingError::WriteJson)
    }
}
