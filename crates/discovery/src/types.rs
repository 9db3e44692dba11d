use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// The content file whose presence makes a directory a skill folder.
pub const SKILL_FILE: &str = "SKILL.md";
/// Optional per-skill metadata file (aliases, helpers, sub-skills).
pub const MANIFEST_FILE: &str = "skill.json";

/// Scope + tool label for one entry of the search-root table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum TierId {
    /// The shared library's own `skills/` directory, when running inside that repository.
    LibrarySelf,
    /// Project-native skills (`<project>/.agents/skills`).
    ProjectNative,
    /// Project-scoped skills of a registered tool (`<project>/.claude/skills`).
    ProjectTool(String),
    /// Personal native skills (`~/.agents/skills`).
    PersonalNative,
    /// Personal skills of a registered tool (`~/.claude/skills`).
    PersonalTool(String),
    /// The installed shared skill library.
    Library,
}

impl TierId {
    /// Returns a stable label for this tier.
    pub fn label(&self) -> String {
        match self {
            TierId::LibrarySelf => "library-self".into(),
            TierId::ProjectNative => "project".into(),
            TierId::ProjectTool(tool) => format!("project-{tool}"),
            TierId::PersonalNative => "personal".into(),
            TierId::PersonalTool(tool) => format!("personal-{tool}"),
            TierId::Library => "library".into(),
        }
    }

    /// Returns the scope tag used in listings.
    ///
    /// - `project`: skills checked into the current project.
    /// - `personal`: skills under the user's home directory.
    /// - `library`: the shared skill library.
    pub fn scope(&self) -> &'static str {
        match self {
            TierId::ProjectNative | TierId::ProjectTool(_) => "project",
            TierId::PersonalNative | TierId::PersonalTool(_) => "personal",
            TierId::LibrarySelf | TierId::Library => "library",
        }
    }

    /// The tool this tier belongs to, if any.
    pub fn tool(&self) -> Option<&str> {
        match self {
            TierId::ProjectTool(tool) | TierId::PersonalTool(tool) => Some(tool),
            _ => None,
        }
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<TierId> for String {
    fn from(tier: TierId) -> Self {
        tier.label()
    }
}

/// One row of the search-root table.
///
/// The same physical directory may appear under two tiers; priority comes from
/// the row's position in the table, never from the directory itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoot {
    /// Tier label for this root.
    pub tier: TierId,
    /// Absolute directory scanned for skill folders.
    pub directory: PathBuf,
    /// Prefix prepended to a root-relative path when shown to the user (`claude:`).
    pub display_prefix: String,
}

impl SearchRoot {
    /// Renders a root-relative path the way users type it back in.
    pub fn display_name(&self, relative_path: &str) -> String {
        format!("{}{}", self.display_prefix, relative_path)
    }

    /// Human-readable description for diagnostics, e.g. `project-claude skills (/repo/.claude/skills)`.
    pub fn describe(&self) -> String {
        format!("{} skills ({})", self.tier, self.directory.display())
    }
}

/// A skill folder matched under a search root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillMatch {
    /// Absolute path of the skill folder.
    pub folder: PathBuf,
    /// Absolute path of the folder's `SKILL.md`.
    pub skill_file: PathBuf,
    /// Root-relative path, forward-slash separated, original case.
    pub relative_path: String,
}

/// A uniquely resolved skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSkill {
    /// Absolute path of the skill's `SKILL.md`.
    pub skill_file: PathBuf,
    /// Absolute path of the skill folder.
    pub folder: PathBuf,
    /// Tier the skill was found in.
    pub tier: TierId,
    /// Root-relative path of the skill folder.
    pub relative_path: String,
    /// Namespaced name as the user would type it (`claude:email-assistant`).
    pub display_name: String,
    /// Whether the skill was found through a declared alias.
    pub via_alias: bool,
}

/// One competing skill in an ambiguous resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Absolute path of the skill folder.
    pub folder: PathBuf,
    /// Root-relative path of the skill folder.
    pub relative_path: String,
    /// Namespaced name as the user would type it.
    pub display_name: String,
    /// Description or usage hint from the frontmatter, read best-effort.
    pub description: Option<String>,
}

/// Two or more skills matched at the same tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguousMatch {
    /// The identifier path that was searched for (namespace stripped).
    pub residual: String,
    /// Tier at which the collision happened.
    pub tier: TierId,
    /// Human-readable description of that tier's root.
    pub tier_description: String,
    /// Every match at that tier, in traversal order.
    pub candidates: Vec<Candidate>,
}

/// Outcome of resolving one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// Exactly one skill matched at the first tier with any match.
    Found(ResolvedSkill),
    /// Several skills matched at the same tier; the caller must disambiguate.
    Ambiguous(AmbiguousMatch),
    /// Nothing matched by path, suffix, or alias.
    NotFound,
}

impl Resolution {
    /// Returns the resolved skill, if any.
    pub fn found(&self) -> Option<&ResolvedSkill> {
        match self {
            Resolution::Found(skill) => Some(skill),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_labels_are_stable() {
        let labels: Vec<_> = [
            TierId::LibrarySelf,
            TierId::ProjectNative,
            TierId::ProjectTool("claude".into()),
            TierId::PersonalNative,
            TierId::PersonalTool("gemini".into()),
            TierId::Library,
        ]
        .iter()
        .map(TierId::label)
        .collect();
        assert_eq!(
            labels,
            vec![
                "library-self",
                "project",
                "project-claude",
                "personal",
                "personal-gemini",
                "library"
            ]
        );
    }

    #[test]
    fn scope_groups_tiers() {
        assert_eq!(TierId::ProjectTool("codex".into()).scope(), "project");
        assert_eq!(TierId::PersonalNative.scope(), "personal");
        assert_eq!(TierId::LibrarySelf.scope(), "library");
    }

    #[test]
    fn display_name_uses_prefix() {
        let root = SearchRoot {
            tier: TierId::PersonalTool("claude".into()),
            directory: PathBuf::from("/home/u/.claude/skills"),
            display_prefix: "claude:".into(),
        };
        assert_eq!(root.display_name("email"), "claude:email");
        assert!(root.describe().starts_with("personal-claude skills ("));
    }

    #[test]
    fn resolution_serializes_with_status_tag() {
        let json = serde_json::to_value(Resolution::NotFound).unwrap();
        assert_eq!(json["status"], "not_found");
    }
}
