use crate::adapters::response_generator::ResponseGenerator;
use crate::domain::{RunParameters, RunSummary, SubmissionOutcome, SubmissionPort, SurveyDefinition};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{error, info};

/// Walks the date range and feeds generated records to a sink.
pub struct RunDriver<'a, S, R = StdRng> {
    definition: &'a SurveyDefinition,
    generator: ResponseGenerator<R>,
    sink: S,
}

impl<'a, S: SubmissionPort, R: Rng> RunDriver<'a, S, R> {
    pub fn new(definition: &'a SurveyDefinition, generator: ResponseGenerator<R>, sink: S) -> Self {
        Self {
            definition,
            generator,
            sink,
        }
    }

    /// Run every (day, repetition) cycle in order.
    ///
    /// Generation and submission failures are logged and counted; they never
    /// stop the loop.
    pub fn run(&mut self, params: &RunParameters) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut cursor = params.start_date;

        info!(
            "Generating {} responses per day from {} to {} ({} days, {} responses)",
            params.per_day,
            params.start_date,
            params.end_date,
            params.days(),
            params.total_cycles()
        );

        while cursor <= params.end_date {
            summary.days += 1;

            for _ in 0..params.per_day {
                summary.cycles += 1;

                let record = match self.generator.generate(self.definition, cursor) {
                    Ok(record) => record,
                    Err(e) => {
                        error!("Failed to generate response for {}: {}", cursor, e);
                        summary.skipped += 1;
                        continue;
                    }
                };

                match self.sink.submit(&record) {
                    SubmissionOutcome::Success(status) => {
                        info!("Sent response for {}: {}", cursor, status);
                        summary.succeeded += 1;
                    }
                    SubmissionOutcome::Failure(e) => {
                        error!("Error sending response for {}: {}", cursor, e);
                        summary.failed += 1;
                    }
                }
            }

            cursor = match cursor.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        info!(
            days = summary.days,
            cycles = summary.cycles,
            succeeded = summary.succeeded,
            failed = summary.failed,
            skipped = summary.skipped,
            "Run complete"
        );

        summary
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
