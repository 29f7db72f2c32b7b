//! Core library for the bolt project scaffolder.
//!
//! Provides the two building blocks the `bolt` CLI is made of:
//! - [`templates`] — a schema-checked string-substitution engine plus the
//!   built-in project templates (README, setup.py, LICENSE, .gitignore)
//! - [`launcher`] — resolves an installed IDE's executable from an
//!   environment variable and spawns it detached on a project directory
//!
//! [`project`] ties the template side together: it materializes a new
//! project directory from the built-in templates, with rollback on failure.

pub mod error;
pub mod launcher;
pub mod project;
pub mod templates;
