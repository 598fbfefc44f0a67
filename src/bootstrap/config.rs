//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities
//!
//! - Read TOML configuration files
//! - Parse TOML into the `AppConfig` DTO
//! - Report I/O and parsing errors with context
//!
//! No validation and no defaults here; both happen where values are used.

use std::path::{Path, PathBuf};

use anyhow::Context;
use mr_core::config::AppConfig;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "myride.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Pick the configuration source.
///
/// An explicit path must exist. Without one, `myride.toml` in the working
/// directory is used if present, otherwise an empty config.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load_config(default_path.to_path_buf())
            } else {
                Ok(AppConfig::empty())
            }
        }
    }
}
