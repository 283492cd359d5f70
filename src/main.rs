//! ghstage - Sync GitHub Actions environments with Google Cloud projects.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghstage::cli::output;
use ghstage::cli::{execute, Cli};
use ghstage::core::{auth, constants};
use ghstage::error::{AuthError, Error, RepoError};

fn main() {
    let cli = Cli::parse();

    // GHSTAGE_LOG takes a full filter directive; --log-level only sets our level
    let mut invalid_level = false;
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        let level = cli.log_level.to_lowercase();
        EnvFilter::try_new(format!("ghstage={}", level)).unwrap_or_else(|_| {
            invalid_level = true;
            EnvFilter::new("ghstage=info")
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if invalid_level {
        tracing::warn!(level = %cli.log_level, "unknown log level, using info");
    }

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());

        match &e {
            Error::Auth(AuthError::MissingToken { .. }) => {
                eprintln!();
                eprintln!("{}", auth::github_token_help());
            }
            Error::Repo(RepoError::NoOrigin | RepoError::Git(_)) => {
                output::hint("specify the repository with --repo <org>/<repo>");
            }
            Error::Auth(AuthError::Gcloud(_)) => {
                output::hint("run: gcloud auth login, or set GHSTAGE_GCP_TOKEN");
            }
            _ => {}
        }

        std::process::exit(1);
    }
}
