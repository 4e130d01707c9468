use thiserror::Error;

use crate::config::{RunSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if settings.schema_path.as_os_str().is_empty() {
            errors.push(ValidationError::MissingField("schema_path".to_string()));
        }

        if let Err(e) = Self::validate_endpoint(&settings.endpoint) {
            errors.push(e);
        }

        if let Err(e) = Self::validate_run(&settings.run) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_endpoint(endpoint: &str) -> Result<(), ValidationError> {
        if endpoint.is_empty() {
            return Err(ValidationError::MissingField("endpoint".to_string()));
        }

        match reqwest::Url::parse(endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            Ok(url) => Err(ValidationError::InvalidValue {
                field: "endpoint".to_string(),
                reason: format!("Unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => Err(ValidationError::InvalidValue {
                field: "endpoint".to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn validate_run(run: &RunSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if run.per_day == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "run.per_day".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        // A preset replaces the explicit dates, so their order is irrelevant
        if run.range.is_none() && run.start_date > run.end_date {
            errors.push(ValidationError::InvalidValue {
                field: "run.start_date".to_string(),
                reason: format!(
                    "Start date {} is after end date {}",
                    run.start_date, run.end_date
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
