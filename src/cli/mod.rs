pub mod clamp_cmd;
pub mod config_cmd;
pub mod demo_cmd;
pub mod style;

use std::path::Path;

use anyhow::{Context, Result};
use clampkit::config::Config;

/// Directory holding the local config; defaults to the current directory.
pub fn resolve_dir(path: Option<String>) -> String {
    path.unwrap_or_else(|| ".".to_string())
}

pub fn load_config(dir: &str) -> Result<Config> {
    Config::load(Path::new(dir)).with_context(|| format!("Failed to load config from {dir}"))
}
