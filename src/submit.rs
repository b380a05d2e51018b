//! Submission controller: turns a repository URL into a job id.
//!
//! Guards against duplicate concurrent submissions, validates only that the
//! URL is non-empty (shape validation belongs to the backend), and keeps the
//! last user-visible error string for redisplay.

use crate::api::ApiClient;
use crate::errors::SubmitError;

pub struct SubmissionController {
    client: ApiClient,
    in_flight: bool,
    last_error: Option<String>,
}

impl SubmissionController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            in_flight: false,
            last_error: None,
        }
    }

    /// The error string from the most recent failed submission, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Submit `repo_url` for documentation and return the new job id.
    ///
    /// An empty URL is rejected locally without any network call. While a
    /// submission is in flight, further calls fail fast with
    /// [`SubmitError::AlreadyInFlight`] and leave the recorded error alone.
    /// The in-flight flag is cleared on every exit path.
    pub async fn submit(&mut self, repo_url: &str) -> Result<String, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::AlreadyInFlight);
        }
        if repo_url.is_empty() {
            let err = SubmitError::EmptyUrl;
            self.last_error = Some(err.to_string());
            return Err(err);
        }

        self.last_error = None;
        self.in_flight = true;
        let result = self.client.start_documentation(repo_url).await;
        self.in_flight = false;

        match result {
            Ok(job_id) => Ok(job_id),
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
