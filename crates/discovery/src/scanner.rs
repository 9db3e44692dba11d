use crate::types::SKILL_FILE;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into, beyond the blanket dot-prefix rule.
const SKIPPED_DIRS: &[&str] = &[".git", "node_modules"];

/// Returns true if `dir` directly contains a `SKILL.md` file.
///
/// The content file is the only required signal; `skill.json` is optional.
pub fn is_skill_folder(dir: &Path) -> bool {
    dir.join(SKILL_FILE).is_file()
}

fn is_pruned(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

/// Recursively collects every skill folder under `root`.
///
/// `max_depth` of `None` scans without limit; `Some(0)` inspects only the
/// root's direct children. Symlinks are followed and classified by their
/// target; broken links, link cycles, and unreadable directories are skipped
/// so one bad subtree never hides the rest. Skill folders may nest, so
/// traversal continues below every match. Results are in traversal order
/// (entries sorted by file name at each level).
///
/// ```
/// use skillctl_discovery::find_skill_folders;
/// use tempfile::tempdir;
///
/// let tmp = tempdir().unwrap();
/// let skill = tmp.path().join("debugging/root-cause");
/// std::fs::create_dir_all(&skill).unwrap();
/// std::fs::write(skill.join("SKILL.md"), "# Root cause").unwrap();
///
/// assert_eq!(find_skill_folders(tmp.path(), None), vec![skill]);
/// ```
pub fn find_skill_folders(root: &Path, max_depth: Option<usize>) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth + 1);
    }
    walker
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(
                    target: "skillctl::discovery",
                    root = %root.display(),
                    error = %err,
                    "skipping unreadable entry"
                );
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir() && is_skill_folder(entry.path()))
        .map(DirEntry::into_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn make_skill(root: &Path, rel: &str) -> PathBuf {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SKILL_FILE), format!("# {rel}")).unwrap();
        dir
    }

    #[test]
    fn missing_root_yields_nothing() {
        let tmp = tempdir().unwrap();
        assert!(find_skill_folders(&tmp.path().join("absent"), None).is_empty());
    }

    #[test]
    fn root_itself_is_not_a_skill() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(SKILL_FILE), "# root").unwrap();
        assert!(find_skill_folders(tmp.path(), None).is_empty());
    }

    #[test]
    fn finds_nested_skills_in_sorted_order() {
        let tmp = tempdir().unwrap();
        let b = make_skill(tmp.path(), "b-skill");
        let a = make_skill(tmp.path(), "a/deep/nested");
        let parent = make_skill(tmp.path(), "b-skill/child");
        assert_eq!(find_skill_folders(tmp.path(), None), vec![a, b, parent]);
    }

    #[test]
    fn manifest_alone_does_not_make_a_skill() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("only-json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("skill.json"), "{}").unwrap();
        assert!(find_skill_folders(tmp.path(), None).is_empty());
    }

    #[test]
    fn skips_dot_and_dependency_directories() {
        let tmp = tempdir().unwrap();
        make_skill(tmp.path(), ".hidden/skill");
        make_skill(tmp.path(), "node_modules/pkg");
        make_skill(tmp.path(), ".git/hooks");
        let kept = make_skill(tmp.path(), "visible");
        assert_eq!(find_skill_folders(tmp.path(), None), vec![kept]);
    }

    #[test]
    fn max_depth_limits_recursion() {
        let tmp = tempdir().unwrap();
        let top = make_skill(tmp.path(), "top");
        let one = make_skill(tmp.path(), "group/one");
        make_skill(tmp.path(), "group/sub/two");
        assert_eq!(find_skill_folders(tmp.path(), Some(0)), vec![top.clone()]);
        assert_eq!(find_skill_folders(tmp.path(), Some(1)), vec![one, top]);
    }

    #[cfg(unix)]
    #[test]
    fn follows_directory_symlinks_and_skips_broken_ones() {
        use std::os::unix::fs::symlink;

        let tmp = tempdir().unwrap();
        let store = tempdir().unwrap();
        let target = make_skill(store.path(), "linked");
        symlink(&target, tmp.path().join("linked")).unwrap();
        symlink(tmp.path().join("does-not-exist"), tmp.path().join("broken")).unwrap();
        let local = make_skill(tmp.path(), "local");

        let found = find_skill_folders(tmp.path(), None);
        assert_eq!(found, vec![tmp.path().join("linked"), local]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_cycles_do_not_loop() {
        use std::os::unix::fs::symlink;

        let tmp = tempdir().unwrap();
        let skill = make_skill(tmp.path(), "loop");
        symlink(tmp.path(), skill.join("back")).unwrap();
        assert_eq!(find_skill_folders(tmp.path(), None), vec![skill]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_does_not_abort_scan() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let locked = tmp.path().join("locked");
        make_skill(tmp.path(), "locked/inner");
        let open = make_skill(tmp.path(), "open");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        if fs::read_dir(&locked).is_ok() {
            // Permission bits are not enforced (running as root).
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let found = find_skill_folders(tmp.path(), None);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(found, vec![open]);
        assert!(!found.contains(&locked.join("inner")));
    }
}
