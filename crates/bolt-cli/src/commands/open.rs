use std::path::Path;

use anyhow::Result;

use bolt_core::launcher::{self, Ide};

use crate::output;

/// Open a project directory in an installed IDE, detached.
pub fn run(ide: &str, path: &Path) -> Result<()> {
    let ide = Ide::from_name(ide)?;
    launcher::launch(ide, path)?;
    output::print_success(&format!("{} launched on {}", ide.name(), path.display()));
    Ok(())
}
