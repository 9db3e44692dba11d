use crate::scanner::find_skill_folders;
use crate::types::{SkillMatch, SKILL_FILE};
use pathdiff::diff_paths;
use std::path::{Component, Path};

/// Root-relative path of `folder`, joined with forward slashes.
///
/// Falls back to the full path when `folder` is not under `root`.
pub fn relative_skill_path(root: &Path, folder: &Path) -> String {
    let Some(rel) = diff_paths(folder, root) else {
        return folder.to_string_lossy().replace('\\', "/");
    };
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/").trim_matches('/').to_lowercase()
}

fn is_suffix_match(candidate: &str, needle: &str) -> bool {
    // Exact path, segment-aligned suffix ("collaboration/brainstorming"), or raw
    // suffix ("storming"); the raw form keeps bare-name lookups permissive.
    candidate == needle
        || candidate.ends_with(&format!("/{needle}"))
        || candidate.ends_with(needle)
}

/// Finds every skill folder under `root` whose relative path matches `residual`.
///
/// Comparison is case-insensitive and separator-normalized; the returned
/// `relative_path` keeps the on-disk case. All matches are returned in
/// traversal order; picking a winner is the resolver's job. An empty residual
/// matches nothing.
pub fn find_matching_skills(root: &Path, residual: &str) -> Vec<SkillMatch> {
    let needle = normalize(residual);
    if needle.is_empty() {
        return Vec::new();
    }
    find_skill_folders(root, None)
        .into_iter()
        .filter_map(|folder| {
            let relative_path = relative_skill_path(root, &folder);
            is_suffix_match(&relative_path.to_lowercase(), &needle).then(|| SkillMatch {
                skill_file: folder.join(SKILL_FILE),
                folder,
                relative_path,
            })
        })
        .collect()
}
