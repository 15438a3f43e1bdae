//! Shared types and utilities for testbench crates.

mod merge;
mod paths;

pub use merge::Merge;
pub use paths::{global_config_dir, project_config_dir};

/// Name of the per-project config directory (`<root>/.testbench`).
pub const PROJECT_DIR: &str = ".testbench";

/// Config file name inside both the global and per-project directories.
pub const CONFIG_FILE: &str = "config.toml";
