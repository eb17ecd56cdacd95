// Command-line front-end.
// Fetches metadata for a single repository and prints it as JSON.

use anyhow::{Context, bail};
use clap::Parser;

use repocard::{CachedRepoClient, GitHubClient};

#[derive(Parser, Debug)]
#[command(
    name = "repocard",
    version,
    about = "Fetch GitHub repository metadata (stars, forks, description, topics)"
)]
struct Cli {
    /// Repository to look up, as OWNER/REPO (e.g. octocat/Hello-World).
    repo: String,

    /// GitHub bearer token; falls back to the GITHUB_TOKEN environment variable.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some((owner, repo)) = cli.repo.split_once('/') else {
        bail!("expected OWNER/REPO, got '{}'", cli.repo);
    };
    if owner.is_empty() || repo.is_empty() {
        bail!("expected OWNER/REPO, got '{}'", cli.repo);
    }

    let token = cli.token.or_else(|| std::env::var("GITHUB_TOKEN").ok());
    let client = CachedRepoClient::new(GitHubClient::new(token.as_deref())?);

    let repository = client
        .get_repository(owner, repo)
        .await
        .with_context(|| format!("failed to fetch {}", cli.repo))?;

    println!("{}", serde_json::to_string_pretty(&repository)?);
    Ok(())
}
