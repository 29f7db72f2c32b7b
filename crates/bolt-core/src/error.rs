//! Unified error types for the bolt toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during bolt operations.
#[derive(Error, Debug)]
pub enum BoltError {
    // --- Templates ---

    /// The value set handed to `render` does not exactly match the template's
    /// declared field set. Both problem sets are reported at once, missing
    /// fields first, so the caller sees everything wrong in one failure.
    #[error("template '{template}' field mismatch: missing {missing:?}, extra {extra:?}")]
    TemplateFields {
        template: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },

    /// Handlebars rendering failed (unresolved placeholder or bad template syntax).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Launcher ---

    /// The project directory to open does not exist.
    #[error("project directory does not exist: {0}")]
    ProjectNotFound(PathBuf),

    /// The IDE's home environment variable is not set.
    #[error("{ide} home environment variable {var} is not set; set it to the path of the {ide} installation home directory")]
    IdeHomeNotSet { ide: &'static str, var: &'static str },

    /// The IDE identifier is not one of: `pycharm`, `vscode`, `webstorm`, `idea`.
    #[error("unsupported IDE: {0} (supported: pycharm, vscode, webstorm, idea)")]
    UnknownIde(String),

    /// Catch-all for failures while resolving or spawning the IDE executable.
    /// Preserves the original cause for diagnostics.
    #[error("failed to launch {ide}: {source}; please open an issue at https://github.com/bolt-project/bolt/issues")]
    LaunchFailed {
        ide: &'static str,
        #[source]
        source: anyhow::Error,
    },

    // --- Project ---

    /// Attempted to create a project in a directory that already exists.
    #[error("project directory already exists: {0}")]
    ProjectExists(PathBuf),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, BoltError>`.
pub type Result<T> = std::result::Result<T, BoltError>;
