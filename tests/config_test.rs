use chrono::NaiveDate;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use survey_seeder::cli::Cli;
use survey_seeder::config::{DateRangePreset, Settings};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_defaults_without_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = Settings::from_file(&temp_dir.path().join("seeder.toml"))?;

    assert_eq!(settings.schema_path, PathBuf::from("survey/pes.json"));
    assert_eq!(settings.endpoint, "http://localhost:5173/api/survey");
    assert_eq!(settings.run.start_date, date(2025, 1, 31));
    assert_eq!(settings.run.end_date, date(2025, 2, 20));
    assert_eq!(settings.run.per_day, 5);
    assert!(settings.run.range.is_none());
    assert!(settings.seed.is_none());
    Ok(())
}

#[test]
fn test_load_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("seeder.toml");

    let seeder_toml = r#"
schema_path = "surveys/pes_conditionals.json"
endpoint = "http://127.0.0.1:8080/api/survey"
seed = 7

[run]
start_date = "2025-03-01"
end_date = "2025-03-10"
per_day = 12
"#;
    fs::write(&path, seeder_toml)?;

    let settings = Settings::from_file(&path)?;

    assert_eq!(
        settings.schema_path,
        PathBuf::from("surveys/pes_conditionals.json")
    );
    assert_eq!(settings.endpoint, "http://127.0.0.1:8080/api/survey");
    assert_eq!(settings.run.start_date, date(2025, 3, 1));
    assert_eq!(settings.run.end_date, date(2025, 3, 10));
    assert_eq!(settings.run.per_day, 12);
    assert_eq!(settings.seed, Some(7));

    let params = settings.run.parameters(date(2026, 1, 1));
    assert_eq!(params.total_cycles(), 120);
    Ok(())
}

#[test]
fn test_range_preset_from_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("seeder.toml");
    fs::write(
        &path,
        r#"
[run]
range = "last_7_days"
"#,
    )?;

    let settings = Settings::from_file(&path)?;
    assert_eq!(settings.run.range, Some(DateRangePreset::Last7Days));

    let params = settings.run.parameters(date(2025, 6, 10));
    assert_eq!(params.start_date, date(2025, 6, 4));
    assert_eq!(params.end_date, date(2025, 6, 10));
    assert_eq!(params.total_cycles(), 35);
    Ok(())
}

#[test]
fn test_kebab_case_range_from_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("seeder.toml");
    fs::write(
        &path,
        r#"
[run]
range = "last-7-days"
"#,
    )?;

    let settings = Settings::from_file(&path)?;
    assert_eq!(settings.run.range, Some(DateRangePreset::Last7Days));

    fs::write(
        &path,
        r#"
[run]
range = "this-quarter"
"#,
    )?;

    let settings = Settings::from_file(&path)?;
    assert_eq!(settings.run.range, Some(DateRangePreset::ThisQuarter));
    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("seeder.toml");
    fs::write(
        &path,
        r#"
endpoint = "http://127.0.0.1:8080/api/survey"

[run]
start_date = "2025-03-01"
end_date = "2025-03-10"
per_day = 12
"#,
    )?;

    let config = path.to_string_lossy().to_string();
    let cli = Cli::parse_from([
        "survey-seeder",
        "--config",
        config.as_str(),
        "--endpoint",
        "http://localhost:9000/api/survey",
        "--per-day",
        "2",
        "--end-date",
        "2025-03-02",
    ]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.endpoint, "http://localhost:9000/api/survey");
    assert_eq!(settings.run.start_date, date(2025, 3, 1));
    assert_eq!(settings.run.end_date, date(2025, 3, 2));
    assert_eq!(settings.run.per_day, 2);
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("seeder.toml");
    fs::write(
        &path,
        r#"
endpoint = ""

[run]
per_day = 0
"#,
    )?;

    let err = Settings::from_file(&path).unwrap_err().to_string();
    assert!(err.contains("Configuration validation failed"));
    assert!(err.contains("endpoint"));
    assert!(err.contains("run.per_day"));
    Ok(())
}
