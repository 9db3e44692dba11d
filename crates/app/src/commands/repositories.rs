use crate::cli::OutputFormat;
use anyhow::Result;
use skillctl_discovery::SearchConfig;
use skillctl_state::list_repositories;
use std::io::Write;

/// Handle the `list-repositories` command.
pub(crate) fn handle_list_repositories_command(
    config: &SearchConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let repos = list_repositories(&config.home, &config.project_root);
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&repos)?)?;
        return Ok(());
    }

    if repos.is_empty() {
        writeln!(out, "No repository aliases configured.")?;
        writeln!(out)?;
        writeln!(
            out,
            "Add entries under \"repositories\" in ~/.agents/config.json or .agents/config.json"
        )?;
        return Ok(());
    }

    let alias_width = repos.iter().map(|r| r.alias.len()).max().unwrap_or(0).max(5);
    let url_width = repos.iter().map(|r| r.url.len()).max().unwrap_or(0).max(3);
    writeln!(out, "Repositories:")?;
    writeln!(out)?;
    writeln!(out, "{:<alias_width$}  {:<url_width$}  Source", "Alias", "URL")?;
    for repo in &repos {
        writeln!(
            out,
            "{:<alias_width$}  {:<url_width$}  ({})",
            repo.alias,
            repo.url,
            repo.scope.label()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {} repository alias(es)", repos.len())?;
    Ok(())
}
