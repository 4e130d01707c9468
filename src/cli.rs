use crate::config::DateRangePreset;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Survey Seeder - posts synthetic survey responses to an intake API
#[derive(Parser, Debug, Clone)]
#[command(name = "survey-seeder", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "SEEDER_CONFIG", default_value = "seeder.toml")]
    pub config: PathBuf,

    /// Survey definition document (JSON or YAML)
    #[arg(long, env = "SEEDER_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Intake endpoint receiving the responses
    #[arg(long, env = "SEEDER_ENDPOINT")]
    pub endpoint: Option<String>,

    /// First day to generate (YYYY-MM-DD)
    #[arg(long, env = "SEEDER_START_DATE")]
    pub start_date: Option<NaiveDate>,

    /// Last day to generate, inclusive (YYYY-MM-DD)
    #[arg(long, env = "SEEDER_END_DATE")]
    pub end_date: Option<NaiveDate>,

    /// Responses generated per day
    #[arg(long, env = "SEEDER_PER_DAY")]
    pub per_day: Option<u32>,

    /// Named date range relative to today; replaces start and end dates
    #[arg(long, env = "SEEDER_RANGE", value_enum)]
    pub range: Option<DateRangePreset>,

    /// Seed for reproducible output
    #[arg(long, env = "SEEDER_SEED")]
    pub seed: Option<u64>,
}
