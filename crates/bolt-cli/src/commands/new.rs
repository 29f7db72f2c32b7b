use std::path::PathBuf;

use anyhow::Result;
use dialoguer::{Confirm, Input};

use bolt_core::project::{self, ProjectOptions};

use crate::output;

/// Create a new project directory from the built-in templates.
///
/// Every value not supplied on the command line is prompted for
/// interactively. Directory creation and rollback live in
/// [`bolt_core::project::create_project`].
pub fn run(
    name: Option<String>,
    author: Option<String>,
    parent_dir: Option<PathBuf>,
    pypi: Option<bool>,
    git: Option<bool>,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Project name").interact_text()?,
    };
    let author = match author {
        Some(a) => a,
        None => Input::new().with_prompt("Author name").interact_text()?,
    };
    let parent_dir = match parent_dir {
        Some(p) => p,
        None => {
            let dir: String = Input::new()
                .with_prompt("Parent directory")
                .default(".".to_string())
                .interact_text()?;
            PathBuf::from(dir)
        }
    };
    let pypi = match pypi {
        Some(v) => v,
        None => Confirm::new()
            .with_prompt("Is it a PyPI project?")
            .default(false)
            .interact()?,
    };
    let git = match git {
        Some(v) => v,
        None => Confirm::new()
            .with_prompt("Is it a Git project?")
            .default(false)
            .interact()?,
    };

    output::print_header(&format!("bolt new: {name}"));
    output::print_step(1, 1, "Creating project directory and files");

    let opts = ProjectOptions {
        name: name.clone(),
        author,
        parent_dir,
        pypi,
        git,
    };
    let project_dir = project::create_project(&opts)?;
    tracing::info!(dir = %project_dir.display(), pypi, git, "project scaffolded");

    output::print_success(&format!(
        "Project '{name}' created at {}",
        project_dir.display()
    ));
    println!();
    println!("  Next steps:");
    println!("    cd {name}");
    println!("    bolt open pycharm .");
    println!();

    Ok(())
}
