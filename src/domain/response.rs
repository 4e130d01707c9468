use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Wire name of the timestamp field carried by every record.
pub const CREATED_AT: &str = "createdAt";

const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One synthetic survey submission.
///
/// Serializes as a flat JSON object: `createdAt` plus one entry per answered
/// question. Warnings collected while generating are kept alongside for the
/// caller but never sent.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseRecord {
    #[serde(rename = "createdAt", serialize_with = "serialize_created_at")]
    created_at: NaiveDateTime,
    #[serde(flatten)]
    answers: BTreeMap<String, Value>,
    #[serde(skip)]
    warnings: Vec<GenerationWarning>,
}

/// Recoverable problems found while answering a single question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    /// Rating question without `rateValues`; answered with `null`
    MissingRatingValues { question: String },
    /// Question named like the reserved timestamp field; not answered
    ReservedName { question: String },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRatingValues { question } => write!(
                f,
                "Question {} of type 'rating' does not have 'rateValues'",
                question
            ),
            Self::ReservedName { question } => write!(
                f,
                "Question {} collides with the reserved '{}' field and was skipped",
                question, CREATED_AT
            ),
        }
    }
}

impl ResponseRecord {
    /// Empty record stamped at midnight of `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            created_at: date.and_time(NaiveTime::MIN),
            answers: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    /// `createdAt` exactly as it goes over the wire
    pub fn created_at_string(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }

    pub fn insert(&mut self, question: impl Into<String>, answer: Value) {
        self.answers.insert(question.into(), answer);
    }

    pub fn answer(&self, question: &str) -> Option<&Value> {
        self.answers.get(question)
    }

    pub fn warn(&mut self, warning: GenerationWarning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }
}

fn serialize_created_at<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(CREATED_AT_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_flat_with_created_at() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let mut record = ResponseRecord::new(date);
        record.insert("gender", json!("F"));
        record.insert("facilityCleanliness", json!({"rooms": 4}));
        record.warn(GenerationWarning::MissingRatingValues {
            question: "roomComfort".to_string(),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "createdAt": "2025-02-01T00:00:00",
                "gender": "F",
                "facilityCleanliness": {"rooms": 4}
            })
        );
    }

    #[test]
    fn test_created_at_round_trips_to_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let record = ResponseRecord::new(date);
        let parsed =
            NaiveDateTime::parse_from_str(&record.created_at_string(), CREATED_AT_FORMAT).unwrap();
        assert_eq!(parsed.date(), date);
    }

    #[test]
    fn test_warning_messages_name_the_question() {
        let warning = GenerationWarning::MissingRatingValues {
            question: "roomComfort".to_string(),
        };
        assert!(warning.to_string().contains("roomComfort"));
    }
}
