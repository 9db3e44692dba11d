//! Command-line front end for skillctl.
//!
//! [`run`] parses arguments, builds the search configuration from the
//! environment and `skillctl.toml`, and dispatches to one command handler.
//! Handlers write to any [`std::io::Write`] so they can be exercised
//! without a terminal.

mod cli;
mod commands;
mod output;

use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_config_get_command, handle_config_set_command, handle_dir_command,
    handle_execute_command, handle_find_skills_command, handle_get_helpers_command,
    handle_list_repositories_command, handle_path_command, handle_resolve_command,
    handle_use_skill_command,
};
use anyhow::{Context, Result};
use clap::Parser;
use skillctl_state::search_config;
use std::io::Write;

/// Entry point for the `skillctl` binary.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = search_config(&cwd)?;
    tracing::debug!(
        target: "skillctl::app",
        project = %config.project_root.display(),
        library = %config.library_root.display(),
        in_library_repo = config.in_library_repo,
        "search configuration"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Commands::FindSkills { format } => handle_find_skills_command(&config, format, &mut out),
        Commands::UseSkill { skill } => handle_use_skill_command(&config, &skill, &mut out),
        Commands::Execute { skill } => handle_execute_command(&config, &skill, &cwd, &mut out),
        Commands::Path { skill } => handle_path_command(&config, &skill, &mut out),
        Commands::Dir { skill } => handle_dir_command(&config, &skill, &mut out),
        Commands::Resolve { skill, format } => {
            handle_resolve_command(&config, &skill, format, &mut out)
        }
        Commands::GetHelpers { skill, term } => {
            handle_get_helpers_command(&config, &skill, &term, &mut out)
        }
        Commands::ListRepositories { format } => {
            handle_list_repositories_command(&config, format, &mut out)
        }
        Commands::ConfigGet => handle_config_get_command(&config.library_root, &mut out),
        Commands::ConfigSet { key, value } => {
            handle_config_set_command(&config.library_root, &key, &value, &mut out)
        }
    };
    out.flush()?;
    result
}
