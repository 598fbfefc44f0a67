use std::time::Duration;

use mr_core::AppConfig;

/// Tuning knobs for one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverSettings {
    /// A lookup running longer than this is treated as not-found.
    pub lookup_timeout: Duration,

    /// Upper bound of in-flight lookups in one pass.
    pub max_concurrent_lookups: usize,
}

impl ResolverSettings {
    /// v1 默认值
    pub fn defaults() -> Self {
        Self {
            lookup_timeout: Duration::from_millis(3_000),
            max_concurrent_lookups: 8,
        }
    }

    /// Apply configured values, keeping the defaults for anything left at 0.
    pub fn from_config(config: &AppConfig) -> Self {
        let defaults = Self::defaults();
        Self {
            lookup_timeout: match config.lookup_timeout_ms {
                0 => defaults.lookup_timeout,
                ms => Duration::from_millis(ms),
            },
            max_concurrent_lookups: match config.max_concurrent_lookups {
                0 => defaults.max_concurrent_lookups,
                n => usize::try_from(n).unwrap_or(usize::MAX),
            },
        }
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Per-call switches supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Whether the live lookup step may run at all.
    pub lookup_available: bool,
}

impl ResolveOptions {
    pub fn online() -> Self {
        Self {
            lookup_available: true,
        }
    }

    pub fn offline() -> Self {
        Self {
            lookup_available: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            lookup_available: !config.offline,
        }
    }
}
