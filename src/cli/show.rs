//! Show command - print environments, stages and well-known variables.

use tracing::info;

use crate::cli::{context, output};
use crate::core::config::Config;
use crate::core::directory::Directory;
use crate::error::Result;

/// Print the environment report, and the protection report with `show_perms`.
pub fn execute(config: &Config, repo: Option<String>, show_perms: bool) -> Result<()> {
    let github = context::github(repo, config)?;
    info!(repo = github.repo(), show_perms, "showing environments");

    let directory = Directory::fetch(&github)?;
    if directory.is_empty() {
        output::dimmed("no environments configured");
    }

    println!("{}", output::environment_table(&directory.environment_rows()));

    if show_perms {
        println!();
        println!("{}", output::reviewer_table(&directory.reviewer_rows()));
    }

    Ok(())
}
