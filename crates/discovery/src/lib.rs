//! Core functionality for locating skills across tiered search roots.
//!
//! This crate provides mechanisms for:
//! - Parsing user-typed skill identifiers (`claude:foo`, `collaboration/brainstorming`).
//! - Building the ordered table of search roots for project, personal, and library scopes.
//! - Scanning directories for skill folders (those containing `SKILL.md`).
//! - Matching identifiers against root-relative paths, with alias fallback.
//! - Reading the optional `skill.json` manifest and `SKILL.md` frontmatter.
//!
//! # Examples
//!
//! ```
//! use skillctl_discovery::{resolve, Resolution, SearchConfig};
//! use tempfile::tempdir;
//!
//! let home = tempdir().unwrap();
//! let project = tempdir().unwrap();
//! let skill_dir = project.path().join(".agents/skills/testing/tdd");
//! std::fs::create_dir_all(&skill_dir).unwrap();
//! std::fs::write(skill_dir.join("SKILL.md"), "# TDD").unwrap();
//!
//! let config = SearchConfig::new(project.path(), home.path());
//! match resolve(&config, "tdd") {
//!     Resolution::Found(skill) => assert_eq!(skill.relative_path, "testing/tdd"),
//!     other => panic!("unexpected resolution: {other:?}"),
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Alias fallback index built from `skill.json` manifests.
pub mod alias;
/// Frontmatter reader for `SKILL.md` content files.
pub mod header;
/// Identifier parsing (namespace tag + residual path).
pub mod identifier;
/// Non-collapsing enumeration of every visible skill.
pub mod listing;
/// Optional `skill.json` manifest reader.
pub mod manifest;
/// Suffix matching of identifiers against skill folders.
pub mod matcher;
/// Registered tool integrations and their skill directories.
pub mod registry;
/// Tier orchestration: found, ambiguous, or not found.
pub mod resolver;
/// Search configuration and the ordered search-root table.
pub mod roots;
/// Recursive skill-folder scanning.
pub mod scanner;
/// Shared types: tiers, matches, and resolution outcomes.
pub mod types;

pub use alias::AliasIndex;
pub use header::{parse_header, read_header, skill_body, split_frontmatter, SkillHeader};
pub use identifier::{parse_identifier, Namespace, ParsedIdentifier};
pub use listing::{list_all, ListedSkill};
pub use manifest::{read_manifest, SkillManifest};
pub use matcher::{find_matching_skills, relative_skill_path};
pub use registry::{ToolRegistry, ToolSpec};
pub use resolver::{resolve, Resolver};
pub use roots::{search_roots, SearchConfig, DEFAULT_LIBRARY_NAME};
pub use scanner::{find_skill_folders, is_skill_folder};
pub use types::{
    AmbiguousMatch, Candidate, Resolution, ResolvedSkill, SearchRoot, SkillMatch, TierId,
    MANIFEST_FILE, SKILL_FILE,
};
