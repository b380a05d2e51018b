//! The `watch` and `status` commands.

use anyhow::{Context, Result, bail};
use tokio_util::sync::CancellationToken;

use repodoc::api::ApiClient;
use repodoc::config::Config;
use repodoc::tracker::{JobSnapshot, TrackOutcome, Tracker};
use repodoc::ui::{StatusUi, print_snapshot};

/// Track an existing job until it reaches a terminal state.
pub async fn cmd_watch(config: &Config, job_id: &str) -> Result<()> {
    let client = ApiClient::new(&config.api_url);
    track_job(client, job_id).await
}

/// Fetch the job state once and render it.
pub async fn cmd_status(config: &Config, job_id: &str) -> Result<()> {
    let client = ApiClient::new(&config.api_url);
    let body = client
        .job_status(job_id)
        .await
        .with_context(|| format!("failed to fetch status for job {job_id}"))?;

    print_snapshot(&JobSnapshot::from_response(job_id, body));
    Ok(())
}

/// Poll `job_id` with the live UI until it terminates or Ctrl-C fires.
pub(crate) async fn track_job(client: ApiClient, job_id: &str) -> Result<()> {
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    let ui = StatusUi::new(job_id);
    let tracker = Tracker::new(client);
    let (outcome, _snapshot) = tracker.track(job_id, &cancel, &ui).await;

    match outcome {
        TrackOutcome::Completed => Ok(()),
        // The failure panel has already been rendered; the error here sets
        // the exit code for scripts.
        TrackOutcome::Failed => bail!("documentation job {job_id} failed"),
        TrackOutcome::Cancelled => {
            println!("Stopped watching job {job_id}; it keeps running on the backend.");
            Ok(())
        }
    }
}
