use crate::cli::OutputFormat;
use crate::output::require_skill;
use anyhow::{Context, Result};
use skillctl_discovery::{parse_header, resolve, skill_body, Resolution, SearchConfig, TierId};
use std::fs;
use std::io::Write;
use std::path::Path;

const RULE: &str = "# ============================================";

/// Handle the `use-skill` command.
pub(crate) fn handle_use_skill_command(
    config: &SearchConfig,
    identifier: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let skill = require_skill(config, identifier, out)?;
    let content = fs::read_to_string(&skill.skill_file)
        .with_context(|| format!("failed to read {}", skill.skill_file.display()))?;
    let header = parse_header(&content);

    writeln!(
        out,
        "# {}",
        header.name.as_deref().unwrap_or(&skill.display_name)
    )?;
    if let Some(description) = &header.description {
        writeln!(out, "# {description}")?;
    }
    if let Some(hint) = &header.when_to_use {
        writeln!(out, "# When to use: {hint}")?;
    }
    writeln!(
        out,
        "# Supporting tools and docs are in {}",
        skill.folder.display()
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "{}", skill_body(&content))?;
    Ok(())
}

/// Handle the `execute` command.
///
/// The wording depends on whether the agent's file tools can reach the
/// skill: files under `cwd` open directly, anything else may need `cat`.
pub(crate) fn handle_execute_command(
    config: &SearchConfig,
    identifier: &str,
    cwd: &Path,
    out: &mut dyn Write,
) -> Result<()> {
    let skill = require_skill(config, identifier, out)?;
    let file = skill.skill_file.display();
    writeln!(out, "Open this file with your Read Tool: {file}")?;
    writeln!(out)?;
    writeln!(out, "<IMPORTANT>")?;

    let has_project_skills = config.project_native_dir().exists()
        || config
            .registry
            .get("claude")
            .is_some_and(|claude| config.project_root.join(&claude.project_dir).exists());

    if skill.skill_file.starts_with(cwd) {
        writeln!(
            out,
            "USE YOUR Read Tool to process this file. DO NOT use `cat` or print commands."
        )?;
    } else {
        writeln!(out, "1. Try using your Read Tool first")?;
        writeln!(
            out,
            "2. If your Read tool fails (file outside workspace), use: cat \"{file}\""
        )?;
        if has_project_skills && skill.tier != TierId::ProjectNative {
            writeln!(
                out,
                "3. Consider using workspace-local skills for better tool compatibility"
            )?;
            writeln!(
                out,
                "   Copy the skill folder into {}",
                config.project_native_dir().display()
            )?;
        } else {
            writeln!(out, "3. NEVER skip loading the skill content")?;
        }
    }
    writeln!(out, "</IMPORTANT>")?;
    Ok(())
}

/// Handle the `path` command.
pub(crate) fn handle_path_command(
    config: &SearchConfig,
    identifier: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let skill = require_skill(config, identifier, out)?;
    writeln!(out, "{}", skill.skill_file.display())?;
    Ok(())
}

/// Handle the `dir` command.
pub(crate) fn handle_dir_command(
    config: &SearchConfig,
    identifier: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let skill = require_skill(config, identifier, out)?;
    writeln!(out, "{}", skill.folder.display())?;
    Ok(())
}

/// Handle the `resolve` command.
///
/// Unlike the other commands this never fails on a miss; the outcome is the output.
pub(crate) fn handle_resolve_command(
    config: &SearchConfig,
    identifier: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let resolution = resolve(config, identifier);
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&resolution)?)?;
        return Ok(());
    }
    match resolution {
        Resolution::Found(skill) => writeln!(
            out,
            "found {} [{}] {}{}",
            skill.display_name,
            skill.tier,
            skill.skill_file.display(),
            if skill.via_alias { " (alias)" } else { "" }
        )?,
        Resolution::Ambiguous(ambiguous) => {
            writeln!(out, "ambiguous in {}", ambiguous.tier_description)?;
            for candidate in ambiguous.candidates {
                writeln!(out, "  - {}", candidate.display_name)?;
            }
        }
        Resolution::NotFound => writeln!(out, "not found: {identifier}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use skillctl_discovery::SKILL_FILE;
    use skillctl_test_utils::TestFixture;

    fn config(fixture: &TestFixture) -> SearchConfig {
        SearchConfig::new(&fixture.project, &fixture.home).with_library_root(&fixture.library)
    }

    fn output<F>(run: F) -> (Result<()>, String)
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let mut out = Vec::new();
        let result = run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn use_skill_prints_header_then_body() {
        let fixture = TestFixture::new().unwrap();
        let dir = fixture
            .create_skill(
                &fixture.library_skills(),
                "testing/tdd",
                "---\nname: Test-Driven Development\ndescription: Red green refactor\nwhen_to_use: Before code\n---\n\n# Steps\n\n1. Write a failing test\n",
            )
            .unwrap();
        let config = config(&fixture);
        let (result, text) = output(|out| handle_use_skill_command(&config, "tdd", out));
        result.unwrap();
        let expected = format!(
            "# Test-Driven Development\n# Red green refactor\n# When to use: Before code\n# Supporting tools and docs are in {}\n{RULE}\n\n# Steps\n\n1. Write a failing test\n",
            dir.display()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn use_skill_falls_back_to_display_name() {
        let fixture = TestFixture::new().unwrap();
        fixture
            .create_skill(&fixture.home.join(".claude/skills"), "email", "Just a body")
            .unwrap();
        let config = config(&fixture);
        let (result, text) = output(|out| handle_use_skill_command(&config, "email", out));
        result.unwrap();
        assert!(text.starts_with("# claude:email\n# Supporting tools and docs are in "));
        assert!(text.ends_with("\n\nJust a body\n"));
    }

    #[test]
    fn execute_workspace_skill_uses_read_tool_only() {
        let fixture = TestFixture::new().unwrap();
        let dir = fixture
            .create_skill(&fixture.project_skills(), "tdd", "# tdd")
            .unwrap();
        let config = config(&fixture);
        let (result, text) =
            output(|out| handle_execute_command(&config, "tdd", &fixture.project, out));
        result.unwrap();
        assert!(text.starts_with(&format!(
            "Open this file with your Read Tool: {}",
            dir.join(SKILL_FILE).display()
        )));
        assert!(text.contains("DO NOT use `cat`"));
        assert!(!text.contains("NEVER skip"));
    }

    #[test]
    fn execute_global_skill_with_project_skills_suggests_local_copy() {
        let fixture = TestFixture::new().unwrap();
        fixture
            .create_skill(&fixture.project_skills(), "other", "# other")
            .unwrap();
        fixture
            .create_skill(&fixture.personal_skills(), "notes", "# notes")
            .unwrap();
        let config = config(&fixture);
        let (result, text) =
            output(|out| handle_execute_command(&config, "notes", &fixture.project, out));
        result.unwrap();
        assert!(text.contains("use: cat \""));
        assert!(text.contains("3. Consider using workspace-local skills"));
    }

    #[test]
    fn execute_global_skill_without_project_skills() {
        let fixture = TestFixture::new().unwrap();
        fixture
            .create_skill(&fixture.library_skills(), "notes", "# notes")
            .unwrap();
        let config = config(&fixture);
        let (result, text) =
            output(|out| handle_execute_command(&config, "notes", &fixture.project, out));
        result.unwrap();
        assert!(text.contains("3. NEVER skip loading the skill content"));
        assert!(text.ends_with("</IMPORTANT>\n"));
    }

    #[test]
    fn path_and_dir_print_locations() {
        let fixture = TestFixture::new().unwrap();
        let dir = fixture
            .create_skill(&fixture.personal_skills(), "writing/plans", "# plans")
            .unwrap();
        let config = config(&fixture);

        let (result, text) = output(|out| handle_path_command(&config, "plans", out));
        result.unwrap();
        assert_eq!(text, format!("{}\n", dir.join(SKILL_FILE).display()));

        let (result, text) = output(|out| handle_dir_command(&config, "writing/plans", out));
        result.unwrap();
        assert_eq!(text, format!("{}\n", dir.display()));
    }

    #[test]
    fn missing_skill_fails_after_listing() {
        let fixture = TestFixture::new().unwrap();
        let config = config(&fixture);
        let (result, text) = output(|out| handle_path_command(&config, "ghost", out));
        assert!(result.is_err());
        assert!(text.starts_with("Error: Skill not found: ghost"));
    }

    #[test]
    fn resolve_json_reports_status() {
        let fixture = TestFixture::new().unwrap();
        let config = config(&fixture);
        let (result, text) =
            output(|out| handle_resolve_command(&config, "ghost", OutputFormat::Json, out));
        result.unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "not_found");

        fixture
            .create_skill(&fixture.project_skills(), "tdd", "# tdd")
            .unwrap();
        let (result, text) =
            output(|out| handle_resolve_command(&config, "tdd", OutputFormat::Json, out));
        result.unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "found");
        assert_eq!(value["tier"], "project");
        assert_eq!(value["via_alias"], false);
    }
}
