//! Command-line interface for the `skillctl` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `skillctl-app` crate.

fn main() -> anyhow::Result<()> {
    skillctl_app::run()
}
