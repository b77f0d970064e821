// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;

/// Formats duration to a human-readable format.
#[must_use]
fn format_elapsed_time(duration: std::time::Duration) -> String {
    let duration = duration.as_secs();
    let seconds = duration % 60;
    let minutes = (duration / 60) % 60;
    let hours = duration / 3600;
    format!("{hours}h {minutes}m {seconds}s")
}

fn run(config: &ecowardrobe_lab::Config) -> Result<(), ecowardrobe_lab::ProcessingError> {
    use ecowardrobe_lab::Config;
    match config {
        Config::Score(config) => {
            config.check()?;
            log::info!("Start scoring {}", config.passport_path.display());
            ecowardrobe_lab::ScoreRunner::run(config)?;
        }
        Config::Wardrobe(config) => {
            config.check()?;
            log::info!("Start summarizing {}", config.input_path.display());
            ecowardrobe_lab::WardrobeRunner::run(config)?;
        }
    }
    Ok(())
}

fn main() {
    let args = ecowardrobe_lab::Args::parse();

    // Logs go to stderr, stdout is reserved for the results.
    if let Err(err) = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {: <5}] {}",
                humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                record.level(),
                message
            ));
        })
        .level(args.log_level)
        .chain(std::io::stderr())
        .apply()
    {
        eprintln!("Logger error:\n{err}");
        return;
    }

    let start_time = std::time::Instant::now();

    if let Err(err) = run(&ecowardrobe_lab::Config::new(&args)) {
        log::error!("Processing error:\n{err}");
        std::process::exit(1);
    }

    log::info!("Done! Elapsed time: {}", format_elapsed_time(start_time.elapsed()));
}
