//! Template system for bolt project scaffolding.
//!
//! Template bodies are embedded into the binary at compile-time via
//! [`include_str!`] in the [`embedded`] module, then rendered at runtime with
//! [Handlebars](https://handlebarsjs.com/) via the
//! [`renderer::TemplateRenderer`].
//!
//! Every template is a [`renderer::TemplateSpec`]: an immutable body plus the
//! exact set of fields it requires. Rendering with a value set that is not
//! exactly that field set is an error, never a silent fill or drop.
//!
//! ## Adding a new template
//!
//! 1. Create the body file under `templates/project/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Declare its `TemplateSpec` below with the required field names
//!
//! **Warning**: the field names declared here must stay in sync with the
//! `{{placeholders}}` used in the body file. The renderer runs in strict
//! mode, so a drifted placeholder fails at render time, not silently.

pub mod embedded;
pub mod renderer;

use renderer::TemplateSpec;

/// README with a single markdown heading.
pub const README: TemplateSpec = TemplateSpec {
    name: "README.md",
    body: embedded::README_MD,
    required_fields: &["project_name"],
};

/// `setup.py` for PyPI packaging, with a requirements-reading helper and
/// build/upload instructions as trailing comments.
pub const SETUP_PY: TemplateSpec = TemplateSpec {
    name: "setup.py",
    body: embedded::SETUP_PY,
    required_fields: &["project_name", "author"],
};

/// MIT license text. The year is a field so rendering stays a pure
/// function of its inputs.
pub const LICENSE: TemplateSpec = TemplateSpec {
    name: "LICENSE",
    body: embedded::LICENSE_TXT,
    required_fields: &["author", "year"],
};

/// Static `.gitignore` for Python build and cache artifacts. No fields.
pub const GITIGNORE: TemplateSpec = TemplateSpec {
    name: ".gitignore",
    body: embedded::GITIGNORE,
    required_fields: &[],
};
