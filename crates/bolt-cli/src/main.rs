//! bolt CLI — scaffold project directories and open them in an IDE.
//!
//! Two commands:
//! - `bolt new` — create a project directory from the built-in templates;
//!   any value not given on the command line is prompted for interactively
//! - `bolt open` — launch an installed IDE, detached, on a directory

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bolt",
    about = "Scaffold project directories from templates and open them in your IDE",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project directory from templates
    New {
        /// Project name (creates a directory with this name)
        name: Option<String>,

        /// Author of the project
        #[arg(long)]
        author: Option<String>,

        /// Parent directory for the project (default: current directory)
        #[arg(long)]
        parent_dir: Option<PathBuf>,

        /// Generate PyPI packaging files (setup.py, MANIFEST.in, LICENSE)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        pypi: Option<bool>,

        /// Generate a .gitignore for version control
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        git: Option<bool>,
    },

    /// Open a project directory in an installed IDE
    Open {
        /// IDE identifier: pycharm, vscode, webstorm, idea
        ide: String,

        /// Project directory to open
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::New {
            name,
            author,
            parent_dir,
            pypi,
            git,
        } => {
            commands::new::run(name, author, parent_dir, pypi, git)?;
        }
        Commands::Open { ide, path } => {
            commands::open::run(&ide, &path)?;
        }
    }

    Ok(())
}
