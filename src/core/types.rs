//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An environment shortname (e.g., `proj-a`).
///
/// Identifies both a Google Cloud project (via its `shortname` label) and the
/// GitHub environment of the same name.
pub type Shortname = String;

/// A deployment stage name as typed by the operator (e.g., `dev`).
pub type StageName = String;

/// A GitHub Actions variable name (e.g., `PROJECT_ID`, `STAGE_DEV`).
pub type VariableName = String;

/// A GitHub Actions variable value.
pub type VariableValue = String;

/// A repository in `<org>/<repo>` form.
pub type RepoSlug = String;
