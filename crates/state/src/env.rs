use anyhow::Result;
use std::path::{Path, PathBuf};

const NATIVE_DIR: &str = ".agents";
const DEFAULT_LIBRARY_DIR: &str = ".agents/superpowers";
const SETTINGS_FILE: &str = ".agents/skillctl.toml";

/// Returns the user's home directory.
///
/// `SKILLCTL_HOME` wins over `$HOME`, which wins over the platform lookup.
pub fn home_dir() -> Result<PathBuf> {
    if let Some(custom) = env_path("SKILLCTL_HOME") {
        return Ok(custom);
    }
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

/// Returns the project root for `cwd`.
///
/// `SKILLCTL_PROJECT_ROOT` overrides; otherwise the nearest ancestor of `cwd`
/// (inclusive) holding an `.agents/` directory, falling back to `cwd` itself.
pub fn project_root(cwd: &Path) -> PathBuf {
    if let Some(custom) = env_path("SKILLCTL_PROJECT_ROOT") {
        return custom;
    }
    cwd.ancestors()
        .find(|dir| dir.join(NATIVE_DIR).is_dir())
        .unwrap_or(cwd)
        .to_path_buf()
}

/// Returns the shared library checkout (`SKILLCTL_LIBRARY_DIR` or `~/.agents/superpowers`).
pub fn library_root(home: &Path) -> PathBuf {
    env_path("SKILLCTL_LIBRARY_DIR").unwrap_or_else(|| home.join(DEFAULT_LIBRARY_DIR))
}

/// Whether `project_root` is a checkout of the library repository itself.
pub fn is_library_repo(project_root: &Path) -> bool {
    project_root.join("skills").is_dir() && project_root.join(".github/prompts").is_dir()
}

/// Returns the path to `skillctl.toml` (`SKILLCTL_CONFIG` overrides).
pub fn settings_file(home: &Path) -> PathBuf {
    env_path("SKILLCTL_CONFIG").unwrap_or_else(|| home.join(SETTINGS_FILE))
}

pub(crate) fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
