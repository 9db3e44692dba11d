use crate::matcher::relative_skill_path;
use crate::roots::{search_roots, SearchConfig};
use crate::scanner::find_skill_folders;
use crate::types::{TierId, SKILL_FILE};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// One entry of the full skill listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedSkill {
    /// Absolute path of the skill folder.
    pub folder: PathBuf,
    /// Absolute path of the folder's `SKILL.md`.
    pub skill_file: PathBuf,
    /// Tier the skill was first seen in.
    pub tier: TierId,
    /// Root-relative path of the skill folder.
    pub relative_path: String,
    /// Namespaced name as the user would type it.
    pub display_name: String,
}

/// Enumerates every skill visible across all tiers, in default search order.
///
/// A relative path seen in an earlier tier hides the same path in later
/// tiers; this only shapes the listing and plays no part in resolution.
pub fn list_all(config: &SearchConfig) -> Vec<ListedSkill> {
    let mut seen = HashSet::new();
    let mut listed = Vec::new();
    for root in search_roots(config, None) {
        for folder in find_skill_folders(&root.directory, None) {
            let relative_path = relative_skill_path(&root.directory, &folder);
            if !seen.insert(relative_path.clone()) {
                continue;
            }
            listed.push(ListedSkill {
                skill_file: folder.join(SKILL_FILE),
                display_name: root.display_name(&relative_path),
                tier: root.tier.clone(),
                folder,
                relative_path,
            });
        }
    }
    listed
}
