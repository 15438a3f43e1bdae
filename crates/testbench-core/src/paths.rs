//! Config directory lookup.

use std::path::{Path, PathBuf};

/// Global config directory: `$XDG_CONFIG_HOME/testbench`, falling back to
/// `~/.config/testbench`.
pub fn global_config_dir() -> Option<PathBuf> {
    let config_home = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
    Some(config_home.join("testbench"))
}

/// Per-project config directory under `root`.
pub fn project_config_dir(root: &Path) -> PathBuf {
    root.join(crate::PROJECT_DIR)
}
