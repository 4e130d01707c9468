use chrono::NaiveDate;
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod range;
pub mod validator;

pub use range::DateRangePreset;

use crate::cli::Cli;
use crate::domain::RunParameters;

const DEFAULT_SCHEMA_PATH: &str = "survey/pes.json";
const DEFAULT_ENDPOINT: &str = "http://localhost:5173/api/survey";
const DEFAULT_START_DATE: &str = "2025-01-31";
const DEFAULT_END_DATE: &str = "2025-02-20";
const DEFAULT_PER_DAY: i64 = 5;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Survey definition document
    pub schema_path: PathBuf,
    /// Intake endpoint receiving one POST per record
    pub endpoint: String,
    pub run: RunSettings,
    /// Fixed RNG seed; system entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunSettings {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub per_day: u32,
    /// Overrides `start_date`/`end_date` when set
    #[serde(default)]
    pub range: Option<DateRangePreset>,
}

impl RunSettings {
    /// Concrete run parameters, resolving any preset against `today`.
    pub fn parameters(&self, today: NaiveDate) -> RunParameters {
        let (start_date, end_date) = match self.range {
            Some(preset) => preset.resolve(today),
            None => (self.start_date, self.end_date),
        };
        RunParameters::new(start_date, end_date, self.per_day)
    }
}

impl Settings {
    /// Create settings from CLI arguments (config file first, then CLI/env overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load_file(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file, falling back to defaults for missing
    /// keys. A missing file is not an error.
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let settings = Self::load_file(path)?;
        settings.validate()?;
        Ok(settings)
    }

    fn load_file(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .set_default("schema_path", DEFAULT_SCHEMA_PATH)?
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("run.start_date", DEFAULT_START_DATE)?
            .set_default("run.end_date", DEFAULT_END_DATE)?
            .set_default("run.per_day", DEFAULT_PER_DAY)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(schema) = &cli.schema {
            self.schema_path = schema.clone();
        }
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(start_date) = cli.start_date {
            self.run.start_date = start_date;
        }
        if let Some(end_date) = cli.end_date {
            self.run.end_date = end_date;
        }
        if let Some(per_day) = cli.per_day {
            self.run.per_day = per_day;
        }
        if cli.range.is_some() {
            self.run.range = cli.range;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
