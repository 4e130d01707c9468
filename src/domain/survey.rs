use serde::Deserialize;
use serde_json::Value;

/// Name of the question that is always answered on a 0-10 scale unless it is
/// declared as single-choice, rating or free-text.
pub const RECOMMEND_FACILITY: &str = "recommendFacility";

/// A survey document: ordered pages of ordered questions.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyDefinition {
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    #[serde(default, alias = "elements")]
    pub questions: Vec<Question>,
}

/// A single question with its answer domain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawQuestion")]
pub struct Question {
    pub name: String,
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// `radiogroup` or `dropdown`
    SingleChoice { choices: Vec<Value> },
    /// `rating`; `None` when the document declares no usable rate values
    Rating { rate_values: Option<Vec<Value>> },
    /// `comment`
    FreeText,
    /// `matrix`: one answer per row, picked from the column values
    Matrix { rows: Vec<String>, columns: Vec<Value> },
    /// `panel`: nested questions visited in place
    Panel { questions: Vec<Question> },
    /// Any type this tool does not know how to answer
    Other { type_name: String },
}

impl SurveyDefinition {
    /// Number of questions of any type, counting through panels.
    pub fn question_count(&self) -> usize {
        fn count(questions: &[Question]) -> usize {
            questions
                .iter()
                .map(|q| match &q.kind {
                    QuestionKind::Panel { questions } => count(questions),
                    _ => 1,
                })
                .sum()
        }
        self.pages.iter().map(|p| count(&p.questions)).sum()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    name: String,
    #[serde(rename = "type")]
    question_type: String,
    #[serde(default)]
    choices: Option<Vec<Value>>,
    #[serde(default)]
    rate_values: Option<Vec<Value>>,
    #[serde(default)]
    rows: Option<Vec<Value>>,
    #[serde(default)]
    columns: Option<Vec<Value>>,
    #[serde(default)]
    elements: Option<Vec<Question>>,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let kind = match raw.question_type.as_str() {
            "radiogroup" | "dropdown" => QuestionKind::SingleChoice {
                choices: answer_values(raw.choices),
            },
            "rating" => QuestionKind::Rating {
                rate_values: raw
                    .rate_values
                    .map(|values| answer_values(Some(values)))
                    .filter(|values| !values.is_empty()),
            },
            "comment" => QuestionKind::FreeText,
            "matrix" => QuestionKind::Matrix {
                rows: raw
                    .rows
                    .unwrap_or_default()
                    .into_iter()
                    .map(row_identifier)
                    .collect(),
                columns: answer_values(raw.columns),
            },
            "panel" => QuestionKind::Panel {
                questions: raw.elements.unwrap_or_default(),
            },
            other => QuestionKind::Other {
                type_name: other.to_string(),
            },
        };

        Question {
            name: raw.name,
            kind,
        }
    }
}

/// Entries are either bare values or `{ "value": .., "text": .. }` objects.
fn answer_values(entries: Option<Vec<Value>>) -> Vec<Value> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            Value::Object(mut map) if map.contains_key("value") => {
                map.remove("value").unwrap_or(Value::Null)
            }
            other => other,
        })
        .collect()
}

fn row_identifier(entry: Value) -> String {
    let value = match entry {
        Value::Object(mut map) if map.contains_key("value") => {
            map.remove("value").unwrap_or(Value::Null)
        }
        other => other,
    };
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
