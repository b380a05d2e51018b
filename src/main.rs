use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use repodoc::config::Config;

mod cmd;

#[derive(Parser)]
#[command(name = "repodoc")]
#[command(version, about = "Submit a repository for documentation and track the job")]
pub struct Cli {
    /// Log more detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the documentation API (overrides REPODOC_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a documentation job for a repository URL
    Submit {
        repo_url: String,

        /// Print the job id and exit instead of tracking the job
        #[arg(long)]
        no_watch: bool,
    },
    /// Track an existing job until it completes or fails
    Watch { job_id: String },
    /// Fetch and render the job state once
    Status { job_id: String },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "repodoc=debug" } else { "repodoc=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::resolve(cli.api_url.as_deref(), cli.verbose);

    match &cli.command {
        Commands::Submit { repo_url, no_watch } => {
            cmd::cmd_submit(&config, repo_url, *no_watch).await?;
        }
        Commands::Watch { job_id } => {
            cmd::cmd_watch(&config, job_id).await?;
        }
        Commands::Status { job_id } => {
            cmd::cmd_status(&config, job_id).await?;
        }
    }

    Ok(())
}
