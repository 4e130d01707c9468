use crate::domain::SurveyDefinition;
use crate::error::LoadError;
use std::io::ErrorKind;
use std::path::Path;

/// Reads survey definitions from disk.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Load the survey definition at `path`.
    ///
    /// `.yaml`/`.yml` files are parsed as YAML, anything else as JSON.
    pub fn load(path: &Path) -> Result<SurveyDefinition, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let definition = match ext {
            "yaml" | "yml" => Self::parse_yaml(&content),
            _ => Self::parse_json(&content),
        }
        .map_err(|reason| LoadError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;

        tracing::info!(
            "Loaded survey schema from {}: {} pages, {} questions",
            path.display(),
            definition.pages.len(),
            definition.question_count()
        );

        Ok(definition)
    }

    pub fn parse_json(content: &str) -> Result<SurveyDefinition, String> {
        serde_json::from_str(content).map_err(|e| format!("JSON parse error: {}", e))
    }

    pub fn parse_yaml(content: &str) -> Result<SurveyDefinition, String> {
        serde_yaml::from_str(content).map_err(|e| format!("YAML parse error: {}", e))
    }
}
