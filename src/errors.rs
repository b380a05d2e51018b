//! Typed error hierarchy for the repodoc client.
//!
//! Two top-level enums cover the two network interactions:
//! - `SubmitError` — creating a documentation job
//! - `FetchError` — a single status poll
//!
//! Nothing here is fatal to the process; every variant is rendered inline
//! or as a panel and the user can retry.

use thiserror::Error;

/// Shown when a job submission fails for any reason the backend did not
/// explain with a structured `detail` field.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to start documentation job";

/// Errors from submitting a repository for documentation.
///
/// The `Display` output of each variant is exactly the string shown to the
/// user: a backend-provided `detail` is surfaced verbatim, everything else
/// collapses to [`SUBMIT_FALLBACK_MESSAGE`].
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Repository URL must not be empty")]
    EmptyUrl,

    #[error("A submission is already in flight")]
    AlreadyInFlight,

    /// The backend rejected the submission and said why.
    #[error("{detail}")]
    Rejected { detail: String },

    /// The create-job request never produced a usable response
    /// (network failure, or a success body without a `job_id`).
    #[error("Failed to start documentation job")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx response whose body carried no structured detail.
    #[error("Failed to start documentation job")]
    Backend,
}

/// Errors from a single status poll.
///
/// A fetch error never aborts tracking; the tracker keeps its last
/// known-good projection and retries on the next tick.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("status request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("status endpoint returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("status response body was malformed")]
    Malformed(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_detail_verbatim() {
        let err = SubmitError::Rejected {
            detail: "bad url".to_string(),
        };
        assert_eq!(err.to_string(), "bad url");
    }

    #[test]
    fn backend_error_displays_fallback_message() {
        assert_eq!(SubmitError::Backend.to_string(), SUBMIT_FALLBACK_MESSAGE);
    }

    #[test]
    fn empty_url_is_matchable() {
        let err = SubmitError::EmptyUrl;
        assert!(matches!(err, SubmitError::EmptyUrl));
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn fetch_status_error_carries_code() {
        let err = FetchError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn all_error_types_implement_std_error_trait() {
        fn assert_std_error<E: std::error::Error>(_: &E) {}
        assert_std_error(&SubmitError::EmptyUrl);
        assert_std_error(&FetchError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
        });
    }
}
