//! # Survey Seeder
//!
//! Fills a survey intake API with synthetic responses. A survey definition is
//! loaded once, then for every day of the configured range a fixed number of
//! random responses is generated and posted, one blocking request at a time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use survey_seeder::cli::Cli;
//! use survey_seeder::config::Settings;
//! use clap::Parser;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new_with_cli(&Cli::parse())?;
//!     let summary = survey_seeder::run(&settings)?;
//!     println!("{} responses sent", summary.succeeded);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: survey definition, response record, run parameters and the
//!   `SubmissionPort` seam
//! - **Adapters**: schema loader, response generator, HTTP client, run driver
//! - **Config**: layered settings and validation

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

use crate::adapters::response_generator::ResponseGenerator;
use crate::adapters::run_driver::RunDriver;
use crate::adapters::schema_loader::SchemaLoader;
use crate::adapters::submission_client::HttpSubmissionClient;
use crate::config::Settings;
use crate::domain::{RunSummary, SubmissionPort};
use chrono::{Local, NaiveDate};
use tracing::error;

/// Run the seeder against the configured HTTP endpoint.
///
/// Fails only when the schema cannot be loaded or the HTTP client cannot be
/// built; individual submission failures end up in the summary.
pub fn run(settings: &Settings) -> anyhow::Result<RunSummary> {
    let client = HttpSubmissionClient::new(settings.endpoint.clone())?;
    run_with(settings, client, Local::now().date_naive())
}

/// Run the seeder against any sink, resolving date presets against `today`.
pub fn run_with<S: SubmissionPort>(
    settings: &Settings,
    sink: S,
    today: NaiveDate,
) -> anyhow::Result<RunSummary> {
    let definition = match SchemaLoader::load(&settings.schema_path) {
        Ok(definition) => definition,
        Err(e) => {
            error!("Error loading survey schema: {}", e);
            return Err(e.into());
        }
    };

    let generator = match settings.seed {
        Some(seed) => ResponseGenerator::seeded(seed),
        None => ResponseGenerator::from_entropy(),
    };

    let params = settings.run.parameters(today);
    let mut driver = RunDriver::new(&definition, generator, sink);
    Ok(driver.run(&params))
}
