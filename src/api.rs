//! HTTP client for the documentation backend.
//!
//! Two endpoints are in scope:
//! - `POST {base_url}/start-documentation` — create a job
//! - `GET {base_url}/job-status/{job_id}` — poll a job (idempotent)

use serde::Deserialize;

use crate::errors::{FetchError, SubmitError};

/// Success body of the create-job endpoint.
#[derive(Debug, Deserialize)]
pub struct StartJobResponse {
    pub job_id: String,
}

/// Body of the job-status endpoint.
///
/// `status` stays a raw string here; mapping it onto the known phase set
/// (including the fail-open handling of unknown tokens) is the projection's
/// job, not the wire layer's.
#[derive(Debug, Clone, Deserialize)]
pub struct JobStatusResponse {
    pub status: String,
    /// Meaningful only when `status` is `failed`.
    #[serde(default)]
    pub message: Option<String>,
    /// Present only when `status` is `completed`.
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Structured error body the backend may attach to a rejection.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for the documentation API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a documentation job for `repo_url` and return its id.
    ///
    /// URL shape validation is the backend's responsibility; when it rejects
    /// a submission with a structured `detail`, that message is surfaced
    /// verbatim through [`SubmitError::Rejected`].
    pub async fn start_documentation(&self, repo_url: &str) -> Result<String, SubmitError> {
        let resp = self
            .http
            .post(format!("{}/start-documentation", self.base_url))
            .json(&serde_json::json!({ "repo_url": repo_url }))
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let detail = resp.json::<ErrorBody>().await.ok().map(|body| body.detail);
            tracing::debug!(%status, has_detail = detail.is_some(), "create-job request rejected");
            return Err(match detail {
                Some(detail) => SubmitError::Rejected { detail },
                None => SubmitError::Backend,
            });
        }

        match resp.json::<StartJobResponse>().await {
            Ok(body) => {
                tracing::debug!(job_id = %body.job_id, "documentation job created");
                Ok(body.job_id)
            }
            Err(err) => Err(SubmitError::Transport(err)),
        }
    }

    /// Fetch the current state of a job. Safe to call repeatedly.
    pub async fn job_status(&self, job_id: &str) -> Result<JobStatusResponse, FetchError> {
        let resp = self
            .http
            .get(format!("{}/job-status/{}", self.base_url, job_id))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FetchError::Status {
                status: resp.status(),
            });
        }

        resp.json::<JobStatusResponse>()
            .await
            .map_err(FetchError::Malformed)
    }
}
