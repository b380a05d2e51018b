//! The `submit` command: start a documentation job, then track it.

use anyhow::{Result, bail};
use console::style;

use repodoc::api::ApiClient;
use repodoc::config::Config;
use repodoc::submit::SubmissionController;
use repodoc::ui::icons::CHECK;

use crate::cmd::watch::track_job;

pub async fn cmd_submit(config: &Config, repo_url: &str, no_watch: bool) -> Result<()> {
    let client = ApiClient::new(&config.api_url);
    let mut controller = SubmissionController::new(client.clone());

    let job_id = match controller.submit(repo_url).await {
        Ok(job_id) => job_id,
        // Display is already the user-facing message: the backend's detail
        // verbatim when it gave one, the fixed fallback otherwise.
        Err(err) => bail!("{err}"),
    };

    println!(
        "{}Job {} started for {}",
        CHECK,
        style(&job_id).green().bold(),
        repo_url
    );

    if no_watch {
        println!("Track it with: repodoc watch {job_id}");
        return Ok(());
    }

    println!();
    track_job(client, &job_id).await
}
