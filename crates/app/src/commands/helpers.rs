use crate::output::require_skill;
use anyhow::{bail, Result};
use skillctl_discovery::{read_manifest, SearchConfig};
use std::io::Write;

/// Handle the `get-helpers` command.
///
/// Prints the absolute path of the helper declared in the skill's
/// `skill.json` that best matches `term`.
pub(crate) fn handle_get_helpers_command(
    config: &SearchConfig,
    identifier: &str,
    term: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let skill = require_skill(config, identifier, out)?;
    let location = skill.folder.display();

    let Some(manifest) = read_manifest(&skill.folder) else {
        writeln!(out, "Error: No skill.json found for skill: {identifier}")?;
        writeln!(out, "  Location: {location}")?;
        bail!("no skill.json for {identifier}");
    };
    let helpers = manifest.helpers.as_deref().unwrap_or_default();
    if helpers.is_empty() {
        writeln!(
            out,
            "Error: No helpers defined in skill.json for skill: {identifier}"
        )?;
        writeln!(out, "  Location: {location}")?;
        bail!("no helpers declared by {identifier}");
    }

    let Some(helper) = manifest.find_helper(term) else {
        writeln!(
            out,
            "Error: No helper found matching \"{term}\" in skill: {identifier}"
        )?;
        writeln!(out)?;
        writeln!(out, "Available helpers:")?;
        for helper in helpers {
            writeln!(out, "  - {helper}")?;
        }
        bail!("no helper matching {term:?}");
    };

    let path = skill.folder.join(helper);
    if !path.exists() {
        writeln!(out, "Error: Helper file not found: {}", path.display())?;
        writeln!(out, "  Defined in skill.json but missing from filesystem")?;
        bail!("helper file missing: {}", path.display());
    }
    writeln!(out, "{}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillctl_test_utils::TestFixture;
    use std::fs;
    use std::path::PathBuf;

    fn config(fixture: &TestFixture) -> SearchConfig {
        SearchConfig::new(&fixture.project, &fixture.home).with_library_root(&fixture.library)
    }

    fn skill_with_manifest(fixture: &TestFixture, manifest: Option<&str>) -> PathBuf {
        let dir = fixture
            .create_skill(&fixture.project_skills(), "aem/block-collection", "# blocks")
            .unwrap();
        if let Some(json) = manifest {
            fixture.write_manifest(&dir, json).unwrap();
        }
        dir
    }

    fn run(fixture: &TestFixture, term: &str) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result =
            handle_get_helpers_command(&config(fixture), "block-collection", term, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_best_matching_helper() {
        let fixture = TestFixture::new().unwrap();
        let dir = skill_with_manifest(
            &fixture,
            Some(r#"{"helpers": ["scripts/get-block-structure.js", "scripts/search-block.js"]}"#),
        );
        fs::create_dir_all(dir.join("scripts")).unwrap();
        fs::write(dir.join("scripts/search-block.js"), "").unwrap();

        let (result, text) = run(&fixture, "search-block");
        result.unwrap();
        assert_eq!(
            text,
            format!("{}\n", dir.join("scripts/search-block.js").display())
        );
    }

    #[test]
    fn missing_manifest_is_reported() {
        let fixture = TestFixture::new().unwrap();
        skill_with_manifest(&fixture, None);
        let (result, text) = run(&fixture, "anything");
        assert!(result.is_err());
        assert!(text.starts_with("Error: No skill.json found for skill: block-collection\n  Location: "));
    }

    #[test]
    fn empty_helpers_are_reported() {
        let fixture = TestFixture::new().unwrap();
        skill_with_manifest(&fixture, Some(r#"{"helpers": []}"#));
        let (result, text) = run(&fixture, "anything");
        assert!(result.is_err());
        assert!(text.starts_with("Error: No helpers defined in skill.json"));
    }

    #[test]
    fn no_match_lists_available_helpers() {
        let fixture = TestFixture::new().unwrap();
        skill_with_manifest(&fixture, Some(r#"{"helpers": ["scripts/lint.sh"]}"#));
        let (result, text) = run(&fixture, "deploy");
        assert!(result.is_err());
        assert!(text.contains("No helper found matching \"deploy\""));
        assert!(text.ends_with("Available helpers:\n  - scripts/lint.sh\n"));
    }

    #[test]
    fn declared_but_missing_file_is_reported() {
        let fixture = TestFixture::new().unwrap();
        skill_with_manifest(&fixture, Some(r#"{"helpers": ["scripts/lint.sh"]}"#));
        let (result, text) = run(&fixture, "lint");
        assert!(result.is_err());
        assert!(text.starts_with("Error: Helper file not found: "));
        assert!(text.contains("missing from filesystem"));
    }
}
