// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use snafu::prelude::*;
use thiserror::Error;

/// Error returned when a material keyword table is invalid.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Material table version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Material table contains an empty keyword")]
    EmptyKeyword,

    #[error("Material table contains no keywords")]
    NoKeywords,
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(context(false), display("Failed to parse scoring config: {source}"))]
    Serde { source: serde_yaml::Error },

    #[snafu(display("Weight `{name}` must be a finite number, got {value}"))]
    InvalidWeight { name: &'static str, value: f64 },
}
