//! Shared test utilities for skillctl crates.
//!
//! This crate provides the environment guards and on-disk skill fixtures
//! used across the skillctl workspace.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = skillctl_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value" until _guard drops
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// A throwaway home, project and library checkout.
///
/// Nothing is created besides the three top-level directories; skill roots
/// appear as skills are added. Everything is removed when the fixture drops.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// Stands in for `$HOME`.
    pub home: PathBuf,
    /// Stands in for the project root.
    pub project: PathBuf,
    /// Stands in for the shared library checkout.
    pub library: PathBuf,
}

impl TestFixture {
    pub fn new() -> io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let home = tempdir.path().join("home");
        let project = tempdir.path().join("project");
        let library = tempdir.path().join("library");
        for dir in [&home, &project, &library] {
            fs::create_dir_all(dir)?;
        }
        Ok(Self {
            tempdir,
            home,
            project,
            library,
        })
    }

    /// `<project>/.agents/skills`
    pub fn project_skills(&self) -> PathBuf {
        self.project.join(".agents/skills")
    }

    /// `~/.agents/skills`
    pub fn personal_skills(&self) -> PathBuf {
        self.home.join(".agents/skills")
    }

    /// `<library>/skills`
    pub fn library_skills(&self) -> PathBuf {
        self.library.join("skills")
    }

    /// Writes `<root>/<rel>/SKILL.md` and returns the skill folder.
    pub fn create_skill(&self, root: &Path, rel: &str, content: &str) -> io::Result<PathBuf> {
        let skill_dir = root.join(rel);
        fs::create_dir_all(&skill_dir)?;
        fs::write(skill_dir.join("SKILL.md"), content)?;
        Ok(skill_dir)
    }

    /// Create a skill with standard frontmatter.
    pub fn create_skill_with_frontmatter(
        &self,
        root: &Path,
        rel: &str,
        description: &str,
        body: &str,
    ) -> io::Result<PathBuf> {
        let name = rel.rsplit('/').next().unwrap_or(rel);
        let content = format!("---\nname: {name}\ndescription: {description}\n---\n{body}");
        self.create_skill(root, rel, &content)
    }

    /// Writes a `skill.json` next to an existing skill's `SKILL.md`.
    pub fn write_manifest(&self, skill_dir: &Path, json: &str) -> io::Result<()> {
        fs::write(skill_dir.join("skill.json"), json)
    }
}
