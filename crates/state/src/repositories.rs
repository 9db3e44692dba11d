use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const AGENTS_CONFIG: &str = ".agents/config.json";

/// Where a repository alias was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryScope {
    /// `~/.agents/config.json`
    Global,
    /// `<project>/.agents/config.json`
    Project,
}

impl RepositoryScope {
    /// Label shown in listings.
    pub fn label(self) -> &'static str {
        match self {
            RepositoryScope::Global => "global",
            RepositoryScope::Project => "project",
        }
    }
}

/// One `repositories` entry: an alias for a skill repository URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryAlias {
    pub alias: String,
    pub url: String,
    pub scope: RepositoryScope,
}

/// `<base>/.agents/config.json`
pub fn agents_config_path(base: &Path) -> PathBuf {
    base.join(AGENTS_CONFIG)
}

/// Reads the `repositories` object of one `.agents/config.json`.
///
/// Missing or malformed files, and non-string URLs, contribute nothing.
fn read_repositories(path: &Path) -> Vec<(String, String)> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };
    let doc: Value = match serde_json::from_str(&text) {
        Ok(doc) => doc,
        Err(err) => {
            debug!(
                target: "skillctl::state",
                path = %path.display(),
                error = %err,
                "ignoring malformed agents config"
            );
            return Vec::new();
        }
    };
    doc.get("repositories")
        .and_then(Value::as_object)
        .map(|repos| {
            repos
                .iter()
                .filter_map(|(alias, url)| Some((alias.clone(), url.as_str()?.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

/// Lists repository aliases from the home and project configs.
///
/// Global entries come first; a project entry with the same alias replaces
/// the global one in place, new project aliases are appended.
pub fn list_repositories(home: &Path, project_root: &Path) -> Vec<RepositoryAlias> {
    let mut repos: Vec<RepositoryAlias> = read_repositories(&agents_config_path(home))
        .into_iter()
        .map(|(alias, url)| RepositoryAlias {
            alias,
            url,
            scope: RepositoryScope::Global,
        })
        .collect();

    for (alias, url) in read_repositories(&agents_config_path(project_root)) {
        let entry = RepositoryAlias {
            alias,
            url,
            scope: RepositoryScope::Project,
        };
        match repos.iter_mut().find(|r| r.alias == entry.alias) {
            Some(existing) => *existing = entry,
            None => repos.push(entry),
        }
    }
    repos
}
