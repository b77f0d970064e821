// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Parser, Subcommand, ValueEnum};

/// Options shared by commands which score products.
#[derive(Parser, Debug)]
pub struct ScoringArgs {
    /// Path to the scoring config (YAML). Defaults are used if not given.
    #[arg(long)]
    pub config: Option<String>,

    /// Path to the material keyword table (YAML). The built-in table is used if not given.
    #[arg(long)]
    pub materials: Option<String>,
}

/// Arguments of the `score` command.
#[derive(Parser, Debug)]
#[command(
    about = "Score a single product",
    long_about = "Reads a Digital Product Passport, calculates its eco score and prints \
                  the normalized product together with the breakdown of the score."
)]
pub struct ScoreArgs {
    /// Passport file (JSON).
    #[arg(long)]
    pub passport: String,

    /// The input file is a product record from the wardrobe backend instead of a passport.
    #[arg(long)]
    pub backend: bool,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Output file. The result is printed to the standard output if not given.
    #[arg(long)]
    pub output: Option<String>,
}

/// Kind of records in the input of the `wardrobe` command.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Passports in any of the published shapes.
    Passports,

    /// Product records from the wardrobe backend.
    Backend,

    /// Already normalized products.
    Products,
}

/// Arguments of the `wardrobe` command.
#[derive(Parser, Debug)]
#[command(
    about = "Summarize a wardrobe",
    long_about = "Reads products of a wardrobe (one JSON record per line), normalizes them \
                  if needed and prints the wardrobe statistics. Lines which cannot be parsed \
                  are skipped."
)]
pub struct WardrobeArgs {
    /// Input file (JSON Lines).
    #[arg(long)]
    pub input: String,

    /// Kind of the input records.
    #[arg(long, value_enum)]
    pub kind: InputKind,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Output file. The result is printed to the standard output if not given.
    #[arg(long)]
    pub output: Option<String>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    Score(ScoreArgs),
    Wardrobe(WardrobeArgs),
}

/// Program arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Logging level.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: log::LevelFilter,

    /// Commands.
    #[command(subcommand)]
    pub command: Commands,
}
