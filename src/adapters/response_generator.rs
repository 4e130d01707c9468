use crate::domain::response::CREATED_AT;
use crate::domain::survey::RECOMMEND_FACILITY;
use crate::domain::{GenerationWarning, Question, QuestionKind, ResponseRecord, SurveyDefinition};
use crate::error::{GenerationError, GenerationResult};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

/// Remarks used to answer free-text questions.
pub const CANNED_REMARKS: &[&str] = &[
    "The experience was great overall",
    "I wish there was more parking",
    "No comment",
    "The staff were friendly",
    "I could never find anyone to help me",
    "The pricing is too high",
    "I had a bad experience here",
];

/// Builds random response records for a survey definition.
///
/// The random source is injected so tests can use a seeded generator; every
/// call to [`generate`](Self::generate) resamples all answers.
pub struct ResponseGenerator<R = StdRng> {
    rng: R,
}

impl ResponseGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ResponseGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one record stamped with `date`.
    pub fn generate(
        &mut self,
        definition: &SurveyDefinition,
        date: NaiveDate,
    ) -> GenerationResult<ResponseRecord> {
        let mut record = ResponseRecord::new(date);
        for page in &definition.pages {
            self.answer_all(&page.questions, &mut record)?;
        }
        Ok(record)
    }

    fn answer_all(
        &mut self,
        questions: &[Question],
        record: &mut ResponseRecord,
    ) -> GenerationResult<()> {
        for question in questions {
            if let QuestionKind::Panel { questions } = &question.kind {
                self.answer_all(questions, record)?;
                continue;
            }

            if question.name == CREATED_AT {
                let warning = GenerationWarning::ReservedName {
                    question: question.name.clone(),
                };
                tracing::warn!("{}", warning);
                record.warn(warning);
                continue;
            }

            if let Some(answer) = self.answer(question, record)? {
                record.insert(question.name.clone(), answer);
            }
        }
        Ok(())
    }

    /// Pick an answer for a single question. `None` means the question is
    /// left out of the record.
    fn answer(
        &mut self,
        question: &Question,
        record: &mut ResponseRecord,
    ) -> GenerationResult<Option<Value>> {
        let answer = match &question.kind {
            QuestionKind::SingleChoice { choices } => {
                let choice = choices.choose(&mut self.rng).ok_or_else(|| {
                    GenerationError::EmptyChoices {
                        question: question.name.clone(),
                    }
                })?;
                Some(choice.clone())
            }
            QuestionKind::Rating { rate_values } => {
                match rate_values.as_deref().and_then(|v| v.choose(&mut self.rng)) {
                    Some(value) => Some(value.clone()),
                    None => {
                        let warning = GenerationWarning::MissingRatingValues {
                            question: question.name.clone(),
                        };
                        tracing::warn!("{}", warning);
                        record.warn(warning);
                        Some(Value::Null)
                    }
                }
            }
            QuestionKind::FreeText => {
                let remark = CANNED_REMARKS[self.rng.gen_range(0..CANNED_REMARKS.len())];
                Some(json!(remark))
            }
            _ if question.name == RECOMMEND_FACILITY => {
                Some(json!(self.rng.gen_range(0..=10u8)))
            }
            QuestionKind::Matrix { rows, columns } => {
                if rows.is_empty() {
                    return Err(GenerationError::EmptyMatrixRows {
                        question: question.name.clone(),
                    });
                }
                if columns.is_empty() {
                    return Err(GenerationError::EmptyMatrixColumns {
                        question: question.name.clone(),
                    });
                }

                let mut cells = Map::new();
                for row in rows {
                    let column = &columns[self.rng.gen_range(0..columns.len())];
                    cells.insert(row.clone(), column.clone());
                }
                Some(Value::Object(cells))
            }
            // answer_all expands panels before calling this
            QuestionKind::Panel { .. } => None,
            QuestionKind::Other { .. } => {
                tracing::debug!("Skipping question {} with unsupported type", question.name);
                None
            }
        };
        Ok(answer)
    }
}
