//! Project directory creation from the built-in templates.
//!
//! ## Directory layout
//!
//! ```text
//! <parent_dir>/<name>/
//! ├── README.md             # rendered from templates::README
//! ├── requirements.txt      # empty
//! ├── setup.py              # --pypi: rendered from templates::SETUP_PY
//! ├── MANIFEST.in           # --pypi: empty
//! ├── LICENSE               # --pypi: author + current year baked in
//! ├── <name>/__init__.py    # --pypi: empty package initializer
//! └── .gitignore            # --git: static template
//! ```
//!
//! Creation is all-or-nothing: if any write fails after the directory is
//! created, the whole tree is removed and the original error propagates.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::error::{BoltError, Result};
use crate::templates::{self, renderer::TemplateRenderer};

/// What to scaffold. Strings arrive already validated by the caller.
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    pub name: String,
    pub author: String,
    pub parent_dir: PathBuf,
    /// Generate PyPI packaging files (setup.py, MANIFEST.in, LICENSE, package dir).
    pub pypi: bool,
    /// Generate a .gitignore.
    pub git: bool,
}

/// Create `parent_dir/name` and materialize the project files into it.
///
/// Fails with [`BoltError::ProjectExists`] if the target directory is
/// already present. On any later failure the created tree is rolled back.
/// Returns the created project directory.
pub fn create_project(opts: &ProjectOptions) -> Result<PathBuf> {
    let project_dir = opts.parent_dir.join(&opts.name);
    if project_dir.exists() {
        return Err(BoltError::ProjectExists(project_dir));
    }

    std::fs::create_dir_all(&project_dir)?;
    tracing::info!(dir = %project_dir.display(), "created project directory");

    if let Err(err) = write_project_files(&project_dir, opts) {
        // roll back the partial tree, surface the original error
        let _ = std::fs::remove_dir_all(&project_dir);
        return Err(err);
    }

    Ok(project_dir)
}

fn write_project_files(project_dir: &Path, opts: &ProjectOptions) -> Result<()> {
    let renderer = TemplateRenderer::new();

    let readme = renderer.render(
        &templates::README,
        &values([("project_name", &opts.name)]),
    )?;
    std::fs::write(project_dir.join("README.md"), readme)?;
    std::fs::write(project_dir.join("requirements.txt"), "")?;

    if opts.pypi {
        let setup = renderer.render(
            &templates::SETUP_PY,
            &values([("project_name", &opts.name), ("author", &opts.author)]),
        )?;
        std::fs::write(project_dir.join("setup.py"), setup)?;
        std::fs::write(project_dir.join("MANIFEST.in"), "")?;

        let year = chrono::Local::now().year().to_string();
        let license = renderer.render(
            &templates::LICENSE,
            &values([("author", &opts.author), ("year", &year)]),
        )?;
        std::fs::write(project_dir.join("LICENSE"), license)?;

        let pkg_dir = project_dir.join(&opts.name);
        std::fs::create_dir_all(&pkg_dir)?;
        std::fs::write(pkg_dir.join("__init__.py"), "")?;
    }

    if opts.git {
        let gitignore = renderer.render(&templates::GITIGNORE, &BTreeMap::new())?;
        std::fs::write(project_dir.join(".gitignore"), gitignore)?;
    }

    Ok(())
}

fn values<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
