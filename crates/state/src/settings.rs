use crate::env::{env_path, home_dir, is_library_repo, library_root, project_root, settings_file};
use serde::Deserialize;
use skillctl_discovery::{SearchConfig, ToolRegistry, ToolSpec, DEFAULT_LIBRARY_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading `skillctl.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("home directory not found")]
    NoHome,
}

/// User settings from `~/.agents/skillctl.toml`.
///
/// ```toml
/// library_name = "superpowers"
/// library_dir = "/opt/superpowers"
///
/// [[tools]]
/// name = "windsurf"
/// project_dir = ".windsurf/skills"
/// user_dir = ".windsurf/skills"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Namespace tag of the shared library.
    #[serde(default)]
    pub library_name: Option<String>,
    /// Library checkout; relative paths are taken from the home directory.
    #[serde(default)]
    pub library_dir: Option<PathBuf>,
    /// Extra tool rows, appended to (or replacing) the built-in ones.
    #[serde(default)]
    pub tools: Vec<ToolSpec>,
}

impl Settings {
    /// Parses settings text; `path` is only used for error reporting.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in tools followed by the configured ones.
    pub fn registry(&self) -> ToolRegistry {
        self.tools.iter().fold(ToolRegistry::builtin(), |registry, tool| {
            registry.with_tool(ToolSpec::new(
                tool.name.clone(),
                tool.project_dir.clone(),
                tool.user_dir.clone(),
            ))
        })
    }
}

/// Loads settings from `path`; a missing file yields defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        debug!(target: "skillctl::state", path = %path.display(), "no settings file");
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = Settings::from_toml(&text, path)?;
    debug!(
        target: "skillctl::state",
        path = %path.display(),
        tools = settings.tools.len(),
        "loaded settings"
    );
    Ok(settings)
}

/// Assembles the resolver's [`SearchConfig`] from the environment and settings.
///
/// Library location precedence: `SKILLCTL_LIBRARY_DIR`, then `library_dir`
/// from the settings file, then `~/.agents/superpowers`.
pub fn search_config(cwd: &Path) -> Result<SearchConfig, SettingsError> {
    let home = home_dir().map_err(|_| SettingsError::NoHome)?;
    let settings = load_settings(&settings_file(&home))?;
    let project = project_root(cwd);

    let library = match (env_path("SKILLCTL_LIBRARY_DIR"), &settings.library_dir) {
        (None, Some(dir)) => home.join(dir),
        _ => library_root(&home),
    };
    let library_name = settings
        .library_name
        .clone()
        .unwrap_or_else(|| DEFAULT_LIBRARY_NAME.to_string());

    Ok(SearchConfig::new(&project, &home)
        .with_library_root(library)
        .with_library_name(library_name)
        .with_registry(settings.registry())
        .with_library_repo(is_library_repo(&project)))
}
