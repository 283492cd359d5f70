//! ghstage - Sync GitHub Actions environments with Google Cloud projects.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── show          # Environment / protection report
//! │   ├── list          # Labelled Google Cloud projects
//! │   ├── trigger       # Workflow dispatch with stage matrices
//! │   ├── set           # Environment + variable assertion
//! │   └── output        # Terminal helpers and tables
//! └── core/             # Core library components
//!     ├── domain/       # EnvSpec, StageMatrix, ActiveStages, Variables
//!     ├── reconcile     # Create-or-update variable writes
//!     ├── assert        # Project → environment assertion
//!     ├── directory     # Report rows
//!     ├── dispatch      # Workflow dispatch inputs
//!     ├── github/       # GitHub trait + REST client
//!     ├── gcp/          # Google Cloud trait + REST client
//!     ├── config        # .ghstage.toml and environment settings
//!     └── repo          # origin remote detection
//! ```
//!
//! # Stages
//!
//! A stage groups environment shortnames and is stored as a repository
//! variable `STAGE_<NAME>` holding `{"include":[{"deploy_env":"<shortname>"}]}`,
//! ready for a GitHub Actions matrix strategy.

pub mod cli;
pub mod core;
pub mod error;
