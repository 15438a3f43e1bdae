//! Configuration system for testbench.
//!
//! Loads config from:
//! 1. Global: ~/.config/testbench/config.toml
//! 2. Per-project: .testbench/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [serve]
//! host = "127.0.0.1"
//! port = 8000
//! api_keys = ["test-key"]
//!
//! [report]
//! cyclomatic_threshold = 5    # highlight cyclomatic > 5
//! cognitive_threshold = 3     # highlight cognitive > 3
//! ```

use crate::report::ReportConfig;
use crate::serve::ServeConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use testbench_core::{CONFIG_FILE, Merge, global_config_dir, project_config_dir};
use testbench_derive::Merge;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, Merge)]
#[serde(default)]
pub struct TestbenchConfig {
    pub serve: ServeConfig,
    pub report: ReportConfig,
}

impl TestbenchConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config, then merges per-project config from
    /// `<root>/.testbench/config.toml` on top.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global_dir) = global_config_dir() {
            if let Some(global) = Self::load_file(&global_dir.join(CONFIG_FILE)) {
                config = config.merge(global);
            }
        }

        if let Some(project) = Self::load_file(&Self::project_path(root)) {
            config = config.merge(project);
        }

        config
    }

    /// Load config from a file path. Missing files are silent; broken ones warn.
    fn load_file(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                return None;
            }
        };
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Path of the per-project config file under `root`.
    pub fn project_path(root: &Path) -> PathBuf {
        project_config_dir(root).join(CONFIG_FILE)
    }
}
