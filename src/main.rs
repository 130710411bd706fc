use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use github_repos::{
    FetchRepositories, GitHubRepositoryFetcher, NetworkService, RepositoryListSnapshot,
    RepositoryListState, ReqwestTransport, StdResult, days_ago_label, relative_or_formatted_date,
};

/// Output format of the repository list
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human readable list
    Text,
    /// JSON snapshot of the list state
    Json,
}

/// Command line arguments for the GitHub repositories client
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, env = "GITHUB_REPOS_OUTPUT", default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// User agent sent with every request (the GitHub API rejects anonymous agents)
    #[arg(short, long, env = "GITHUB_REPOS_USER_AGENT", default_value = concat!("github-repos/", env!("CARGO_PKG_VERSION")))]
    user_agent: String,

    /// Maximum number of repositories displayed
    #[arg(short, long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let state = build_repository_list_state(&args)?;
    state.trigger_fetch().await;
    let mut snapshot = state.snapshot();
    if let Some(limit) = args.limit {
        snapshot.repositories.truncate(limit);
    }

    match args.output {
        OutputFormat::Text => print!("{}", render_text(&snapshot, Utc::now())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }

    match snapshot.error_message {
        Some(error_message) => Err(anyhow!(error_message)),
        None => {
            info!("Done");
            Ok(())
        }
    }
}

fn build_repository_list_state(args: &Args) -> StdResult<RepositoryListState> {
    let transport = Arc::new(ReqwestTransport::try_new(&args.user_agent)?);
    let fetcher = Arc::new(GitHubRepositoryFetcher::new(NetworkService::new(transport)));
    let use_case = Arc::new(FetchRepositories::new(fetcher));

    Ok(RepositoryListState::new(use_case))
}

fn render_text(snapshot: &RepositoryListSnapshot, now: DateTime<Utc>) -> String {
    let lines = if snapshot.is_loading && snapshot.repositories.is_empty() {
        vec!["Loading repositories...".to_string()]
    } else if snapshot.repositories.is_empty() {
        vec![
            "No Repositories Found".to_string(),
            snapshot
                .error_message
                .clone()
                .unwrap_or_else(|| "Try refreshing or check your connection".to_string()),
        ]
    } else {
        snapshot
            .repositories
            .iter()
            .map(|repository| {
                format!(
                    "{:<40} {:<24} {:<28} {:<14} {}",
                    repository.name(),
                    repository.owner().username(),
                    relative_or_formatted_date(repository.created_at(), now),
                    days_ago_label(repository.created_at(), now),
                    repository.html_url()
                )
            })
            .chain(
                snapshot
                    .error_message
                    .iter()
                    .map(|error_message| format!("Error: {error_message}")),
            )
            .collect()
    };

    lines
        .into_iter()
        .map(|line| format!("{line}\n"))
        .collect()
}
