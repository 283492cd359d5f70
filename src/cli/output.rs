//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints, variable keys
//! - Dimmed: secondary info
//!
//! Reports are rendered as borderless tables so they stay grep-friendly.

use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::core::directory::{EnvironmentRow, ProjectRow, ReviewerRow};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ triggered dispatch.yaml`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ GITHUB_BEARER_TOKEN is not set`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "⚠".yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ specify the repository with --repo <org>/<repo>`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "→".cyan(), msg.cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

/// Format a variable key in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        k.cyan().to_string()
    } else {
        k.to_string()
    }
}

fn render(builder: Builder) -> String {
    builder.build().with(Style::blank()).to_string()
}

/// `SHORTNAME STAGE PROJECT_ID PROJECT_NUMBER DPLATFORM BASE_DOMAIN`
pub fn environment_table(rows: &[EnvironmentRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "SHORTNAME",
        "STAGE",
        "PROJECT_ID",
        "PROJECT_NUMBER",
        "DPLATFORM",
        "BASE_DOMAIN",
    ]);
    for row in rows {
        builder.push_record([
            row.shortname.as_str(),
            row.stages.as_str(),
            row.project_id.as_str(),
            row.project_number.as_str(),
            row.dplatform.as_str(),
            row.base_domain.as_str(),
        ]);
    }
    render(builder)
}

/// `SHORTNAME PROT SELF REVIEWERS`
pub fn reviewer_table(rows: &[ReviewerRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["SHORTNAME", "PROT", "SELF", "REVIEWERS"]);
    for row in rows {
        builder.push_record([
            row.shortname.as_str(),
            row.protected.as_str(),
            row.self_review.as_str(),
            row.reviewer.as_str(),
        ]);
    }
    render(builder)
}

/// `SHORTNAME PROJECT_ID PROJECT_NUMBER ENV`
pub fn project_table(rows: &[ProjectRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["SHORTNAME", "PROJECT_ID", "PROJECT_NUMBER", "ENV"]);
    for row in rows {
        builder.push_record([
            row.shortname.as_str(),
            row.project_id.as_str(),
            row.project_number.as_str(),
            row.env.as_str(),
        ]);
    }
    render(builder)
}
