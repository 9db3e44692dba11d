//! Shared rendering for listings and failed resolutions.

use anyhow::{anyhow, Result};
use skillctl_discovery::{
    list_all, read_header, resolve, AmbiguousMatch, Resolution, ResolvedSkill, SearchConfig,
};
use std::io::Write;

/// Writes every visible skill with its description and usage hint.
pub(crate) fn write_listing(config: &SearchConfig, out: &mut dyn Write) -> Result<()> {
    for skill in list_all(config) {
        let header = read_header(&skill.skill_file);
        writeln!(out, "{}", skill.display_name)?;
        if let Some(description) = &header.description {
            writeln!(out, "  {description}")?;
        }
        if let Some(hint) = &header.when_to_use {
            writeln!(out, "  When to use: {hint}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_ambiguous(ambiguous: &AmbiguousMatch, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Error: Multiple skills match \"{}\" in {}:",
        ambiguous.residual, ambiguous.tier_description
    )?;
    writeln!(out)?;
    for candidate in &ambiguous.candidates {
        writeln!(out, "  {}", candidate.display_name)?;
        writeln!(
            out,
            "    {}",
            candidate.description.as_deref().unwrap_or("(no description)")
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Please be more specific. Examples:")?;
    for candidate in ambiguous.candidates.iter().take(2) {
        writeln!(out, "  skillctl execute {}", candidate.display_name)?;
    }
    Ok(())
}

/// Resolves `identifier`, or explains why it could not be and fails.
///
/// Ambiguity lists the competing skills; a miss lists everything available.
pub(crate) fn require_skill(
    config: &SearchConfig,
    identifier: &str,
    out: &mut dyn Write,
) -> Result<ResolvedSkill> {
    match resolve(config, identifier) {
        Resolution::Found(skill) => Ok(skill),
        Resolution::Ambiguous(ambiguous) => {
            write_ambiguous(&ambiguous, out)?;
            Err(anyhow!(
                "`{identifier}` matches {} skills",
                ambiguous.candidates.len()
            ))
        }
        Resolution::NotFound => {
            writeln!(out, "Error: Skill not found: {identifier}")?;
            writeln!(out)?;
            writeln!(out, "Available skills:")?;
            write_listing(config, out)?;
            Err(anyhow!("skill not found: {identifier}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillctl_test_utils::TestFixture;

    fn config(fixture: &TestFixture) -> SearchConfig {
        SearchConfig::new(&fixture.project, &fixture.home).with_library_root(&fixture.library)
    }

    fn render(config: &SearchConfig, id: &str) -> (Result<ResolvedSkill>, String) {
        let mut out = Vec::new();
        let result = require_skill(config, id, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn ambiguous_lists_candidates_and_examples() {
        let fixture = TestFixture::new().unwrap();
        let root = fixture.library_skills();
        fixture
            .create_skill_with_frontmatter(&root, "collaboration/brainstorming", "Refine ideas", "")
            .unwrap();
        fixture
            .create_skill(&root, "debugging/brainstorming", "# no frontmatter")
            .unwrap();

        let (result, text) = render(&config(&fixture), "brainstorming");
        assert!(result.is_err());
        assert!(text.starts_with("Error: Multiple skills match \"brainstorming\" in library skills ("));
        assert!(text.contains("  superpowers:collaboration/brainstorming\n    Refine ideas\n"));
        assert!(text.contains("  superpowers:debugging/brainstorming\n    (no description)\n"));
        assert!(text.contains("Please be more specific. Examples:"));
        assert!(text.contains("  skillctl execute superpowers:debugging/brainstorming\n"));
    }

    #[test]
    fn not_found_lists_available_skills() {
        let fixture = TestFixture::new().unwrap();
        fixture
            .create_skill_with_frontmatter(&fixture.personal_skills(), "notes", "Keep notes", "")
            .unwrap();

        let (result, text) = render(&config(&fixture), "missing");
        assert_eq!(result.unwrap_err().to_string(), "skill not found: missing");
        assert!(text.starts_with("Error: Skill not found: missing\n\nAvailable skills:\n"));
        assert!(text.contains("notes\n  Keep notes\n"));
    }

    #[test]
    fn found_writes_nothing() {
        let fixture = TestFixture::new().unwrap();
        fixture
            .create_skill(&fixture.project_skills(), "tdd", "# tdd")
            .unwrap();
        let (result, text) = render(&config(&fixture), "tdd");
        assert_eq!(result.unwrap().relative_path, "tdd");
        assert!(text.is_empty());
    }
}
