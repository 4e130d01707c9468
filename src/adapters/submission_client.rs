use crate::domain::{ResponseRecord, SubmissionOutcome, SubmissionPort};
use crate::error::SubmissionError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

/// Posts records to the survey intake API, one blocking request per record.
pub struct HttpSubmissionClient {
    client: Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmissionError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn post(&self, record: &ResponseRecord) -> Result<u16, SubmissionError> {
        let body = serde_json::to_vec(record)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let message = response.text().unwrap_or_default();
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(status.as_u16())
    }
}

impl SubmissionPort for HttpSubmissionClient {
    fn submit(&self, record: &ResponseRecord) -> SubmissionOutcome {
        match self.post(record) {
            Ok(status) => SubmissionOutcome::Success(status),
            Err(e) => SubmissionOutcome::Failure(e),
        }
    }
}
