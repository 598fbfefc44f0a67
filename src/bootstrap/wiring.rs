//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - Create infra implementations (HTTP lookup, file store, catalog)
//! - Inject them into the favorites use cases
//! - Apply defaults for values the config leaves empty
//!
//! ## Prohibited / 禁止事项
//!
//! - No resolution policy here; that lives in `mr-app`
//! - 不包含任何解析策略
//!
//! > This is the only place allowed to depend on mr-infra and mr-app together.
//! > 这是唯一允许同时依赖 mr-infra 和 mr-app 的地方。

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use mr_app::{
    AddFavorite, ListFavorites, RemoveFavorite, ResolveFavorites, ResolveOptions,
    ResolverSettings,
};
use mr_core::config::AppConfig;
use mr_core::ports::{SavedItemStorePort, VehicleLookupPort};
use mr_infra::{load_catalog, HttpVehicleLookup, JsonFileSavedItemStore};
use tracing::info;

/// Inventory API used when `[api] base_url` is not configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// HTTP client timeout used when `[api] request_timeout_ms` is not configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Vehicle lookup initialization failed: {0}")]
    LookupInit(String),

    #[error("Fallback catalog initialization failed: {0}")]
    CatalogInit(String),

    #[error("Favorites storage initialization failed: {0}")]
    StorageInit(String),
}

/// Everything the command layer needs, fully assembled.
pub struct AppDeps {
    pub resolve: Arc<ResolveFavorites>,
    pub list: ListFavorites,
    pub add: AddFavorite,
    pub remove: RemoveFavorite,
    /// Options derived from `[resolver] offline`
    pub default_options: ResolveOptions,
}

fn favorites_dir(config: &AppConfig) -> WiringResult<PathBuf> {
    if !config.favorites_dir.as_os_str().is_empty() {
        return Ok(config.favorites_dir.clone());
    }

    dirs::data_dir()
        .map(|dir| dir.join("myride").join("favorites"))
        .ok_or_else(|| {
            WiringError::StorageInit(
                "no platform data directory; set storage.favorites_dir".to_string(),
            )
        })
}

fn create_lookup(config: &AppConfig) -> WiringResult<HttpVehicleLookup> {
    let base_url = if config.api_base_url.trim().is_empty() {
        DEFAULT_API_BASE_URL
    } else {
        config.api_base_url.trim()
    };
    let timeout = match config.api_request_timeout_ms {
        0 => DEFAULT_REQUEST_TIMEOUT,
        ms => Duration::from_millis(ms),
    };

    HttpVehicleLookup::new(base_url, timeout)
        .map_err(|e| WiringError::LookupInit(format!("{:#}", e)))
}

/// Wire all dependencies together
/// 将所有依赖连接在一起
///
/// # Errors
///
/// Returns `WiringError` if any adapter fails to initialize.
pub async fn wire(config: &AppConfig) -> WiringResult<AppDeps> {
    let lookup: Arc<dyn VehicleLookupPort> = Arc::new(create_lookup(config)?);

    let catalog = load_catalog(&config.fallback_path)
        .await
        .map_err(|e| WiringError::CatalogInit(e.to_string()))?;

    let dir = favorites_dir(config)?;
    let store: Arc<dyn SavedItemStorePort> = Arc::new(JsonFileSavedItemStore::new(dir.clone()));

    let settings = ResolverSettings::from_config(config);
    info!(
        favorites_dir = %dir.display(),
        lookup_timeout_ms = settings.lookup_timeout.as_millis() as u64,
        max_concurrent_lookups = settings.max_concurrent_lookups,
        offline = config.offline,
        "dependencies wired"
    );

    let resolve = Arc::new(ResolveFavorites::new(lookup, Arc::new(catalog), settings));

    Ok(AppDeps {
        list: ListFavorites::new(store.clone(), resolve.clone()),
        add: AddFavorite::new(store.clone()),
        remove: RemoveFavorite::new(store),
        resolve,
        default_options: ResolveOptions::from_config(config),
    })
}
