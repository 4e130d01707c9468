use crate::error::SubmissionError;

pub mod response;
pub mod run;
pub mod survey;

pub use response::{GenerationWarning, ResponseRecord};
pub use run::{RunParameters, RunSummary};
pub use survey::{Page, Question, QuestionKind, SurveyDefinition};

/// Result of handing one record to a sink
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Accepted with the given HTTP status
    Success(u16),
    Failure(SubmissionError),
}

/// Anything that accepts generated records.
///
/// Implementations report failures through the outcome instead of returning
/// an error so the driver can keep going.
pub trait SubmissionPort {
    fn submit(&self, record: &ResponseRecord) -> SubmissionOutcome;
}

impl<T: SubmissionPort + ?Sized> SubmissionPort for &T {
    fn submit(&self, record: &ResponseRecord) -> SubmissionOutcome {
        (**self).submit(record)
    }
}
