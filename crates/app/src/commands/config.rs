use anyhow::Result;
use serde_json::Value;
use skillctl_state::{parse_config_value, read_library_config, write_library_config};
use std::io::Write;
use std::path::Path;

/// Handle the `config-get` command.
pub(crate) fn handle_config_get_command(library_root: &Path, out: &mut dyn Write) -> Result<()> {
    let config = read_library_config(library_root);
    writeln!(out, "Current configuration:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
    Ok(())
}

/// Handle the `config-set` command.
pub(crate) fn handle_config_set_command(
    library_root: &Path,
    key: &str,
    value: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let parsed = parse_config_value(value);
    write_library_config(library_root, key, parsed.clone())?;
    let shown = match &parsed {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    writeln!(out, "✓ Set {key} = {shown}")?;
    Ok(())
}
