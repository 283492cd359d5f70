//! List command - Google Cloud projects labelled with a shortname.

use crate::cli::{context, output};
use crate::core::config::Config;
use crate::core::directory;
use crate::error::Result;

/// Print labelled projects.
pub fn execute(config: &Config) -> Result<()> {
    let gcp = context::gcp(config)?;
    let rows = directory::list_projects(&gcp)?;

    if rows.is_empty() {
        output::dimmed("no projects labelled with a shortname");
        return Ok(());
    }

    println!("{}", output::project_table(&rows));
    Ok(())
}
