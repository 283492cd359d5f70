//! Command-line interface.

pub mod completions;
pub mod context;
pub mod list;
pub mod output;
pub mod set;
pub mod show;
pub mod trigger;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::domain::EnvSpec;
use crate::error::Result;

/// ghstage - Sync GitHub Actions environments with Google Cloud projects.
#[derive(Parser)]
#[command(
    name = "ghstage",
    about = "Generate GitHub environment variables and stage matrices for Google Cloud environments",
    version
)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show GitHub environments, their stages and variables
    Show {
        /// GitHub repository as <org>/<repo>
        #[arg(long, env = "GHSTAGE_REPO")]
        repo: Option<String>,
        /// Show protection rules and reviewers
        #[arg(short = 'p', long)]
        show_perms: bool,
    },

    /// List Google Cloud projects labelled with a shortname
    List,

    /// Dispatch a workflow with stage matrix inputs
    Trigger {
        /// Stages in form <stage>=<env>,<env>
        #[arg(required = true, value_name = "SPEC")]
        env: Vec<String>,
        /// GitHub repository as <org>/<repo>
        #[arg(long, env = "GHSTAGE_REPO")]
        repo: Option<String>,
        /// Workflow file name [default: dispatch.yaml]
        #[arg(short, long)]
        workflow: Option<String>,
        /// Workflow git reference [default: main]
        #[arg(short = 'r', long = "ref", value_name = "REF")]
        git_ref: Option<String>,
    },

    /// Configure GitHub environments and stage matrices
    Set {
        /// Stage definitions in form <stage>=<env>,<env>
        #[arg(required = true, value_name = "SPEC")]
        env: Vec<String>,
        /// GitHub repository as <org>/<repo>
        #[arg(long, env = "GHSTAGE_REPO")]
        repo: Option<String>,
        /// Print the variables that would be set without changing anything
        #[arg(long)]
        show_only: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Parse every spec token up front so a typo fails before any request.
fn parse_specs(tokens: &[String]) -> Result<Vec<EnvSpec>> {
    tokens
        .iter()
        .map(|t| EnvSpec::parse(t).map_err(Into::into))
        .collect()
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    if let Command::Completions { shell } = &command {
        return completions::execute(shell.clone());
    }

    let config = Config::load()?;

    match command {
        Command::Show { repo, show_perms } => show::execute(&config, repo, show_perms),
        Command::List => list::execute(&config),
        Command::Trigger {
            env,
            repo,
            workflow,
            git_ref,
        } => {
            let specs = parse_specs(&env)?;
            trigger::execute(&config, &specs, repo, workflow, git_ref)
        }
        Command::Set {
            env,
            repo,
            show_only,
        } => {
            let specs = parse_specs(&env)?;
            set::execute(&config, &specs, repo, show_only)
        }
        Command::Completions { .. } => Ok(()),
    }
}
