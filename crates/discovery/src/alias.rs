use crate::manifest::read_manifest;
use crate::matcher::relative_skill_path;
use crate::scanner::find_skill_folders;
use crate::types::{SkillMatch, SKILL_FILE};
use std::collections::HashMap;
use std::path::Path;

/// Declared aliases of every skill under one search root.
///
/// Built only when path matching has failed everywhere, and only for the
/// roots the fallback actually reaches.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    entries: HashMap<String, Vec<SkillMatch>>,
}

impl AliasIndex {
    /// Scans `root` and reads every skill's `skill.json`.
    ///
    /// Skills without a manifest, or with a malformed one, contribute nothing.
    pub fn build(root: &Path) -> Self {
        let mut entries: HashMap<String, Vec<SkillMatch>> = HashMap::new();
        for folder in find_skill_folders(root, None) {
            let Some(aliases) = read_manifest(&folder).and_then(|m| m.aliases) else {
                continue;
            };
            let relative_path = relative_skill_path(root, &folder);
            for alias in aliases {
                let key = alias.trim().to_lowercase();
                if key.is_empty() {
                    continue;
                }
                let bucket = entries.entry(key).or_default();
                if bucket.iter().any(|m| m.folder == folder) {
                    continue;
                }
                bucket.push(SkillMatch {
                    folder: folder.clone(),
                    skill_file: folder.join(SKILL_FILE),
                    relative_path: relative_path.clone(),
                });
            }
        }
        Self { entries }
    }

    /// Skills declaring `identifier` as an alias, in traversal order.
    pub fn lookup(&self, identifier: &str) -> &[SkillMatch] {
        self.entries
            .get(&identifier.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct aliases indexed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no skill under the root declares an alias.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
