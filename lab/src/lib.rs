// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod config;
pub mod errors;
pub mod runners;
pub mod utils;

pub use crate::{
    commands::Args,
    config::Config,
    errors::ProcessingError,
    runners::{ScoreReport, ScoreRunner, WardrobeRunner},
};
