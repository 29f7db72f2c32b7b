//! IDE launcher: resolve an installed IDE's executable and open a project in it.
//!
//! Each supported IDE is a variant of the closed [`Ide`] enum carrying its
//! user-facing name, the environment variable that must point at its
//! installation home (`PYCHARM_HOME`, `VSCODE_HOME`, `WEBSTORM_HOME`,
//! `IDEA_HOME`), and a per-platform executable path inside that home.
//!
//! [`launch`] runs three precondition checks in order (project directory
//! exists, home variable set, executable resolved) and then spawns the IDE
//! detached: new process group, no wait. The child outlives the launcher and
//! its exit status is never collected.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

use crate::error::{BoltError, Result};

/// Platform branch used for executable resolution.
///
/// Everything that is not Windows takes the POSIX branch, matching the
/// install layout JetBrains and VSCode share on Linux and macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }
}

/// A supported IDE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ide {
    PyCharm,
    VsCode,
    WebStorm,
    IntelliJIdea,
}

impl Ide {
    pub const ALL: [Ide; 4] = [Ide::PyCharm, Ide::VsCode, Ide::WebStorm, Ide::IntelliJIdea];

    /// Lowercase dispatch identifier, as accepted by [`Ide::from_name`].
    pub fn identifier(self) -> &'static str {
        match self {
            Self::PyCharm => "pycharm",
            Self::VsCode => "vscode",
            Self::WebStorm => "webstorm",
            Self::IntelliJIdea => "idea",
        }
    }

    /// Resolve an IDE from its identifier, case-insensitively.
    ///
    /// Identifiers are `pycharm`, `vscode`, `webstorm`, `idea`. Anything
    /// else fails with [`BoltError::UnknownIde`] listing the supported set.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.to_ascii_lowercase();
        Ide::ALL
            .into_iter()
            .find(|ide| ide.identifier() == lower)
            .ok_or_else(|| BoltError::UnknownIde(name.to_string()))
    }

    /// User-facing name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::PyCharm => "PyCharm",
            Self::VsCode => "VSCode",
            Self::WebStorm => "WebStorm",
            Self::IntelliJIdea => "IntelliJ IDEA",
        }
    }

    /// Environment variable that must point at the IDE's installation home.
    pub fn home_env_var(self) -> &'static str {
        match self {
            Self::PyCharm => "PYCHARM_HOME",
            Self::VsCode => "VSCODE_HOME",
            Self::WebStorm => "WEBSTORM_HOME",
            Self::IntelliJIdea => "IDEA_HOME",
        }
    }

    /// Executable path inside the installation home for the given platform.
    pub fn exec_path(self, home: &Path, platform: Platform) -> PathBuf {
        let rel: &[&str] = match (self, platform) {
            (Self::PyCharm, Platform::Windows) => &["bin", "pycharm64.exe"],
            (Self::PyCharm, Platform::Posix) => &["bin", "pycharm.sh"],
            (Self::VsCode, Platform::Windows) => &["Code.exe"],
            (Self::VsCode, Platform::Posix) => &["code"],
            (Self::WebStorm, Platform::Windows) => &["bin", "webstorm64.exe"],
            (Self::WebStorm, Platform::Posix) => &["bin", "webstorm.sh"],
            (Self::IntelliJIdea, Platform::Windows) => &["bin", "idea64.exe"],
            (Self::IntelliJIdea, Platform::Posix) => &["bin", "idea.sh"],
        };
        rel.iter().fold(home.to_path_buf(), |path, seg| path.join(seg))
    }
}

/// Open `project_path` in `ide`, detached from this process.
///
/// Precondition checks run in order and the first failure terminates the
/// operation, no retries:
/// 1. `project_path` must exist — [`BoltError::ProjectNotFound`]
/// 2. the IDE's home variable must be set — [`BoltError::IdeHomeNotSet`]
/// 3. resolution/spawn failures wrap into [`BoltError::LaunchFailed`] with
///    the original cause preserved
///
/// Returns as soon as the child is spawned; its exit status is never
/// collected.
pub fn launch(ide: Ide, project_path: &Path) -> Result<()> {
    if !project_path.exists() {
        return Err(BoltError::ProjectNotFound(project_path.to_path_buf()));
    }

    let var = ide.home_env_var();
    let home = std::env::var_os(var).ok_or(BoltError::IdeHomeNotSet {
        ide: ide.name(),
        var,
    })?;

    let exec = ide.exec_path(Path::new(&home), Platform::current());
    tracing::debug!(ide = ide.name(), exec = %exec.display(), "launching IDE");

    spawn_detached(&exec, project_path).map_err(|source| BoltError::LaunchFailed {
        ide: ide.name(),
        source,
    })
}

/// Spawn `exec` with the absolute project path as its sole argument, in a
/// new process group so it is not torn down when the launcher exits. Does
/// not block on the child.
fn spawn_detached(exec: &Path, project_path: &Path) -> anyhow::Result<()> {
    let project_path = project_path
        .canonicalize()
        .with_context(|| format!("resolving absolute path of {}", project_path.display()))?;

    let mut cmd = Command::new(exec);
    cmd.arg(&project_path);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // pgid 0 puts the child in its own process group
        cmd.process_group(0);
    }
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const DETACHED_PROCESS: u32 = 0x0000_0008;
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
        cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
    }

    cmd.spawn()
        .with_context(|| format!("spawning {}", exec.display()))?;
    Ok(())
}
