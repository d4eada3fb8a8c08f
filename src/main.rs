// Command line front-end of the GitHub service.
//
// Works on the git repository containing the current directory. Credentials
// come from the configuration file or $GITHUB_TOKEN; RUST_LOG sets verbosity.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use futures::StreamExt;
use gitrepo_github::{GitHubClient, GitRemotes, GithubService, ServiceConfig};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gitrepo-github", version, about = "Manage GitHub repositories from git")]
struct Cli {
    /// TOML configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Service target (hub or github)
    #[arg(long, default_value = "github")]
    target: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a repository under your account
    Create {
        /// user/repo
        repository: String,
        /// Register the new repository as a remote
        #[arg(long)]
        add: bool,
    },
    /// Fork a repository and register upstream and fork remotes
    Fork {
        /// user/repo
        repository: String,
        #[arg(long, default_value = "master")]
        branch: String,
        /// Pull the branch from the fork afterwards
        #[arg(long)]
        clone: bool,
    },
    /// Delete one of your repositories
    Delete {
        repo: String,
        /// Owner, defaults to the authenticated user
        #[arg(long)]
        user: Option<String>,
    },
    /// Show a repository
    Get {
        /// user/repo
        repository: String,
    },
    /// Pull request operations
    Request {
        #[command(subcommand)]
        action: RequestAction,
    },
    /// Print the authenticated account
    Whoami,
}

#[derive(Subcommand, Debug)]
enum RequestAction {
    /// List open pull requests
    List {
        /// user/repo
        repository: String,
    },
    /// Fetch a pull request into a local branch
    Fetch {
        /// user/repo
        repository: String,
        number: u64,
    },
}

fn split_repository(repository: &str) -> Result<(&str, &str)> {
    match repository.split_once('/') {
        Some((user, repo)) if !user.is_empty() && !repo.is_empty() => Ok((user, repo)),
        _ => bail!("expected <user>/<repo>, got {repository:?}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !ServiceConfig::handles(&cli.target) {
        bail!("unknown target {}", cli.target);
    }

    let config = match &cli.config {
        Some(path) => ServiceConfig::load(path).await?,
        None => ServiceConfig::default(),
    }
    .with_env_token();

    // connect() swaps in the authenticated client
    let mut builder = GitHubClient::builder();
    if let Some(uri) = &config.base_uri {
        builder = builder.base_uri(uri.clone());
    }
    let client = builder.build()?;
    let work_dir = std::env::current_dir().context("cannot read current directory")?;
    let remotes = GitRemotes::new(work_dir, config.clone());

    let mut service = GithubService::new(client, remotes, config);
    service.connect().await?;
    info!("Connected as {}", service.username().unwrap_or_default());

    match cli.command {
        Command::Create { repository, add } => {
            let (user, repo) = split_repository(&repository)?;
            service.create(user, repo, add).await?;
            println!("Created {user}/{repo}");
        }
        Command::Fork {
            repository,
            branch,
            clone,
        } => {
            let (user, repo) = split_repository(&repository)?;
            service.fork(user, repo, &branch, clone).await?;
        }
        Command::Delete { repo, user } => {
            service.delete(&repo, user.as_deref()).await?;
            println!("Deleted {repo}");
        }
        Command::Get { repository } => {
            let (user, repo) = split_repository(&repository)?;
            let found = service.get_repository(user, repo).await?;
            println!("{}", serde_json::to_string_pretty(&found)?);
        }
        Command::Request { action } => match action {
            RequestAction::List { repository } => {
                let (user, repo) = split_repository(&repository)?;
                let mut requests = service.request_list(user, repo);
                while let Some(request) = requests.next().await {
                    let request = request?;
                    println!("{:>6}\t{}\t{}", request.id, request.title, request.issue_link);
                }
            }
            RequestAction::Fetch { repository, number } => {
                let (user, repo) = split_repository(&repository)?;
                let branch = service.request_fetch(user, repo, number, false).await?;
                println!("Fetched pull request #{number} into {branch}");
            }
        },
        Command::Whoami => {
            let name = service.user().await?;
            println!(
                "{} ({})",
                service.username().unwrap_or_default(),
                name.unwrap_or_default()
            );
        }
    }

    Ok(())
}
