use clap::{Parser, Subcommand, ValueEnum};

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Command-line interface for the `skillctl` application.
#[derive(Debug, Parser)]
#[command(
    name = "skillctl",
    version,
    about = "Finds and loads SKILL.md skills across project, personal, and library scopes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `skillctl` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lists every available skill across all scopes.
    FindSkills {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Prints a skill's content with a short header.
    UseSkill {
        /// Skill name, path suffix, `tool:path`, or alias.
        skill: String,
    },
    /// Tells the agent which skill file to open.
    Execute {
        /// Skill name, path suffix, `tool:path`, or alias.
        skill: String,
    },
    /// Prints the path of a skill's SKILL.md.
    Path {
        /// Skill name, path suffix, `tool:path`, or alias.
        skill: String,
    },
    /// Prints the directory a skill lives in.
    Dir {
        /// Skill name, path suffix, `tool:path`, or alias.
        skill: String,
    },
    /// Prints the full resolution result (debug).
    Resolve {
        /// Skill name, path suffix, `tool:path`, or alias.
        skill: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Finds the helper file in a skill's skill.json that best matches a term.
    GetHelpers {
        /// Skill name, path suffix, `tool:path`, or alias.
        skill: String,
        /// Helper name or fragment (`search-block`).
        term: String,
    },
    /// Lists repository aliases from the global and project `.agents/config.json`.
    ListRepositories {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Shows the library configuration.
    ConfigGet,
    /// Sets one library configuration key (`auto_update false`).
    ConfigSet {
        /// Configuration key.
        key: String,
        /// New value; `true` and `false` are stored as booleans.
        value: String,
    },
}
