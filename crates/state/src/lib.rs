//! Manages environment lookup and persisted configuration.
//!
//! This crate provides utilities for:
//! - Locating the home directory, project root, and library checkout.
//! - Loading `skillctl.toml` settings and turning them into a [`SearchConfig`].
//! - Reading and updating the library's `.config.json`.
//! - Listing repository aliases from `.agents/config.json`.
//!
//! [`SearchConfig`]: skillctl_discovery::SearchConfig

pub mod env;
pub mod library_config;
pub mod repositories;
pub mod settings;

pub use env::{home_dir, is_library_repo, library_root, project_root, settings_file};
pub use library_config::{
    library_config_path, parse_config_value, read_library_config, write_library_config,
    LibraryConfig,
};
pub use repositories::{agents_config_path, list_repositories, RepositoryAlias, RepositoryScope};
pub use settings::{load_settings, search_config, Settings, SettingsError};
