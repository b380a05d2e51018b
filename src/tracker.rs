//! Status tracker: polls a job until it reaches a terminal state.
//!
//! The tracker owns the polling cadence and the client-local projection of
//! the job. Fetches are strictly sequential per job: the next tick is
//! scheduled only after the previous fetch settles, so responses can never
//! reorder. Whether to keep polling is re-derived from each freshly fetched
//! status, never from a separate flag, so a terminal first response halts
//! the loop with zero further round-trips.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, JobStatusResponse};
use crate::errors::FetchError;
use crate::phase::{JobStatus, PHASE_COUNT, PHASE_SEQUENCE, Phase, StepState, project};

/// Fixed re-fetch interval while the job is non-terminal. There is no
/// backoff; the interval does not change under error conditions.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Client-local projection of a job, refreshed on every successful fetch.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    pub job_id: String,
    pub status: JobStatus,
    /// Backend detail, meaningful when the job failed.
    pub message: Option<String>,
    /// Artifact link, present once the job completed.
    pub download_url: Option<String>,
    /// Set when the most recent poll failed; the rest of the snapshot keeps
    /// the last known-good state.
    pub fetch_error: Option<String>,
}

impl JobSnapshot {
    /// A fresh projection, initialized to `queued` before the first fetch.
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            status: JobStatus::Phase(Phase::Queued),
            message: None,
            download_url: None,
            fetch_error: None,
        }
    }

    /// Build a snapshot directly from a single status response.
    pub fn from_response(job_id: impl Into<String>, body: JobStatusResponse) -> Self {
        let mut snapshot = Self::new(job_id);
        snapshot.apply(body);
        snapshot
    }

    /// Replace the projection with a freshly fetched status, clearing any
    /// earlier fetch error.
    pub fn apply(&mut self, body: JobStatusResponse) {
        self.status = JobStatus::from_token(&body.status);
        self.message = body.message;
        self.download_url = body.download_url;
        self.fetch_error = None;
    }

    /// Record a failed poll without touching the last known-good state.
    pub fn note_fetch_error(&mut self, err: &FetchError) {
        self.fetch_error = Some(err.to_string());
    }

    /// The phase list with each step's display classification.
    pub fn steps(&self) -> [(Phase, StepState); PHASE_COUNT] {
        let states = project(self.status);
        std::array::from_fn(|i| (PHASE_SEQUENCE[i], states[i]))
    }
}

/// Consumer of tracker updates. Called after every poll, success or failure.
pub trait TrackerSink: Sync {
    fn emit(&self, snapshot: &JobSnapshot);
}

/// How tracking ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    Completed,
    Failed,
    Cancelled,
}

/// Polls one job's status resource until it terminates or is cancelled.
///
/// Trackers for different jobs are fully independent; nothing is shared.
pub struct Tracker {
    client: ApiClient,
    poll_interval: Duration,
}

impl Tracker {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// Override the poll interval (tests use a short one).
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Track `job_id` until it completes, fails, or `cancel` fires.
    ///
    /// The sink sees a snapshot after every poll. A poll that errors keeps
    /// the previous projection and sets `fetch_error`; tracking continues on
    /// the next tick. Cancellation is checked around both suspension points,
    /// so a response that lands after cancellation is never applied.
    pub async fn track(
        &self,
        job_id: &str,
        cancel: &CancellationToken,
        sink: &dyn TrackerSink,
    ) -> (TrackOutcome, JobSnapshot) {
        let mut snapshot = JobSnapshot::new(job_id);

        loop {
            let fetched = tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(job_id, "tracking cancelled, discarding in-flight fetch");
                    return (TrackOutcome::Cancelled, snapshot);
                }
                result = self.client.job_status(job_id) => result,
            };

            match fetched {
                Ok(body) => {
                    tracing::debug!(job_id, status = %body.status, "status poll succeeded");
                    snapshot.apply(body);
                }
                Err(err) => {
                    tracing::warn!(job_id, error = %err, "status poll failed, keeping last known phase");
                    snapshot.note_fetch_error(&err);
                }
            }

            sink.emit(&snapshot);

            if snapshot.status.is_terminal() {
                let outcome = match snapshot.status {
                    JobStatus::Failed => TrackOutcome::Failed,
                    _ => TrackOutcome::Completed,
                };
                return (outcome, snapshot);
            }

            tokio::select! {
                _ = cancel.cancelled() => return (TrackOutcome::Cancelled, snapshot),
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: &str) -> JobStatusResponse {
        serde_json::from_value(serde_json::json!({ "status": status })).unwrap()
    }

    #[test]
    fn snapshot_starts_queued() {
        let snapshot = JobSnapshot::new("job-1");
        assert_eq!(snapshot.status, JobStatus::Phase(Phase::Queued));
        assert!(snapshot.fetch_error.is_none());
    }

    #[test]
    fn apply_clears_previous_fetch_error() {
        let mut snapshot = JobSnapshot::new("job-1");
        snapshot.note_fetch_error(&FetchError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
        });
        assert!(snapshot.fetch_error.is_some());

        snapshot.apply(response("generating"));
        assert_eq!(snapshot.status, JobStatus::Phase(Phase::Generating));
        assert!(snapshot.fetch_error.is_none());
    }

    #[test]
    fn fetch_error_keeps_last_known_phase() {
        let mut snapshot = JobSnapshot::new("job-1");
        snapshot.apply(response("building"));
        snapshot.note_fetch_error(&FetchError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        });

        assert_eq!(snapshot.status, JobStatus::Phase(Phase::Building));
        assert!(snapshot.fetch_error.as_deref().unwrap().contains("500"));
    }

    #[test]
    fn unknown_status_projects_as_queued() {
        let mut snapshot = JobSnapshot::new("job-1");
        snapshot.apply(response("daydreaming"));
        assert_eq!(snapshot.status, JobStatus::Phase(Phase::Queued));

        let steps = snapshot.steps();
        assert_eq!(steps[0].1, StepState::Current);
        assert!(steps[1..].iter().all(|(_, s)| *s == StepState::Pending));
    }

    #[test]
    fn steps_pair_phases_with_projection() {
        let mut snapshot = JobSnapshot::new("job-1");
        snapshot.apply(response("parsing"));

        let steps = snapshot.steps();
        assert_eq!(steps[0], (Phase::Queued, StepState::Completed));
        assert_eq!(steps[1], (Phase::Cloning, StepState::Completed));
        assert_eq!(steps[2], (Phase::Parsing, StepState::Current));
        assert_eq!(steps[3], (Phase::Generating, StepState::Pending));
    }
}
