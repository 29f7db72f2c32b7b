//! Compile-time embedded template bodies.
//!
//! Each constant loads a template file from `templates/project/` via
//! [`include_str!`]. The paths are relative to this source file
//! (`crates/bolt-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!`
//! path here, and do NOT edit a body's `{{placeholders}}` without updating
//! the matching `TemplateSpec::required_fields` in the parent module.

pub const README_MD: &str = include_str!("../../../../templates/project/readme.md.tmpl");
pub const SETUP_PY: &str = include_str!("../../../../templates/project/setup.py.tmpl");
pub const LICENSE_TXT: &str = include_str!("../../../../templates/project/license.txt.tmpl");
pub const GITIGNORE: &str = include_str!("../../../../templates/project/gitignore");
