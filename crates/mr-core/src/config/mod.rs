//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation
//!
//! > **This module contains data only, no policy, no validation.**
//! > **此模块只包含数据结构定义，禁止：任何业务逻辑或策略、验证逻辑、默认值计算。**
//!
//! Defaults are applied where the values are consumed (resolver settings,
//! wiring), so "0" and "" below are facts meaning "not configured".

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Inventory API base URL, e.g. `https://api.myride.example/api`
    pub api_base_url: String,

    /// HTTP client request timeout in milliseconds (0 = not configured)
    pub api_request_timeout_ms: u64,

    /// Skip live lookups entirely and resolve from cache/fallback only
    pub offline: bool,

    /// Per-lookup timeout inside one resolution pass (0 = not configured)
    pub lookup_timeout_ms: u64,

    /// Upper bound of concurrent lookups (0 = not configured)
    pub max_concurrent_lookups: u64,

    /// Directory holding one saved-items file per user
    pub favorites_dir: PathBuf,

    /// JSON array of sample listings (empty = bundled sample data)
    pub fallback_path: PathBuf,

    /// Directory for rolling log files (empty = stderr only)
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing sections and keys become empty values. Negative integers are
    /// read as 0.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let u64_at = |section: &str, key: &str| -> u64 {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .map_or(0, |v| v.max(0) as u64)
        };

        Ok(Self {
            api_base_url: str_at("api", "base_url"),
            api_request_timeout_ms: u64_at("api", "request_timeout_ms"),
            offline: toml_value
                .get("resolver")
                .and_then(|r| r.get("offline"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            lookup_timeout_ms: u64_at("resolver", "lookup_timeout_ms"),
            max_concurrent_lookups: u64_at("resolver", "max_concurrent_lookups"),
            favorites_dir: PathBuf::from(str_at("storage", "favorites_dir")),
            fallback_path: PathBuf::from(str_at("catalog", "fallback_path")),
            log_dir: PathBuf::from(str_at("logging", "log_dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            api_request_timeout_ms: 0,
            offline: false,
            lookup_timeout_ms: 0,
            max_concurrent_lookups: 0,
            favorites_dir: PathBuf::new(),
            fallback_path: PathBuf::new(),
            log_dir: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [api]
            base_url = "http://localhost:5000/api"
            request_timeout_ms = 4000

            [resolver]
            offline = true
            lookup_timeout_ms = 1500
            max_concurrent_lookups = 4

            [storage]
            favorites_dir = "/var/lib/myride/favorites"

            [catalog]
            fallback_path = "/etc/myride/sample.json"

            [logging]
            log_dir = "/var/log/myride"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.api_request_timeout_ms, 4000);
        assert!(config.offline);
        assert_eq!(config.lookup_timeout_ms, 1500);
        assert_eq!(config.max_concurrent_lookups, 4);
        assert_eq!(config.favorites_dir, PathBuf::from("/var/lib/myride/favorites"));
        assert_eq!(config.fallback_path, PathBuf::from("/etc/myride/sample.json"));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/myride"));
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[api]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_clamps_negative_numbers() {
        let toml_value: Value = toml::from_str("[resolver]\nlookup_timeout_ms = -5\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.lookup_timeout_ms, 0);
    }
}
