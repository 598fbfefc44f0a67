use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::info;

use mr_core::{FallbackCatalog, VehicleListing};

/// Sample inventory compiled into the binary.
const BUNDLED_SAMPLE_VEHICLES: &str = include_str!("../../data/sample_vehicles.json");

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read fallback catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fallback catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

fn parse(origin: &str, content: &str) -> Result<FallbackCatalog, CatalogLoadError> {
    let listings: Vec<VehicleListing> =
        serde_json::from_str(content).map_err(|source| CatalogLoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;
    Ok(FallbackCatalog::new(listings))
}

/// The sample inventory shipped with the application.
pub fn bundled_catalog() -> Result<FallbackCatalog, CatalogLoadError> {
    parse("<bundled>", BUNDLED_SAMPLE_VEHICLES)
}

/// Load the fallback catalog from a JSON array file.
///
/// An empty path selects the bundled sample inventory.
pub async fn load_catalog(path: &Path) -> Result<FallbackCatalog, CatalogLoadError> {
    let catalog = if path.as_os_str().is_empty() {
        bundled_catalog()?
    } else {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| CatalogLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        parse(&path.display().to_string(), &content)?
    };

    info!(listings = catalog.len(), "fallback catalog loaded");
    Ok(catalog)
}
