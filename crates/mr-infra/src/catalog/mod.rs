mod sample_catalog;

pub use sample_catalog::{bundled_catalog, load_catalog, CatalogLoadError};
