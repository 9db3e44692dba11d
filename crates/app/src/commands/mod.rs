//! CLI command handlers for the skillctl application.

mod config;
mod find;
mod helpers;
mod repositories;
mod skill;

pub(crate) use config::{handle_config_get_command, handle_config_set_command};
pub(crate) use find::handle_find_skills_command;
pub(crate) use helpers::handle_get_helpers_command;
pub(crate) use repositories::handle_list_repositories_command;
pub(crate) use skill::{
    handle_dir_command, handle_execute_command, handle_path_command, handle_resolve_command,
    handle_use_skill_command,
};
