use crate::cli::OutputFormat;
use crate::output::write_listing;
use anyhow::Result;
use serde_json::json;
use skillctl_discovery::{list_all, read_header, SearchConfig};
use std::io::Write;

/// Handle the `find-skills` command.
pub(crate) fn handle_find_skills_command(
    config: &SearchConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    if format == OutputFormat::Json {
        let skills: Vec<_> = list_all(config)
            .into_iter()
            .map(|skill| {
                let header = read_header(&skill.skill_file);
                json!({
                    "name": skill.display_name,
                    "relative_path": skill.relative_path,
                    "tier": skill.tier,
                    "scope": skill.tier.scope(),
                    "path": skill.skill_file,
                    "description": header.description,
                    "when_to_use": header.when_to_use,
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&skills)?)?;
        return Ok(());
    }

    write_listing(config, out)?;
    writeln!(out, "Usage:")?;
    writeln!(out, "  skillctl execute <skill-name> # Load a specific skill")?;
    Ok(())
}
