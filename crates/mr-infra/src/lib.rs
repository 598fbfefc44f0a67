//! Infrastructure adapters for My Ride.
//!
//! Implements the `mr-core` ports against the inventory REST API and the
//! local filesystem, and loads the bundled fallback catalog.

pub mod catalog;
pub mod favorites;
pub mod lookup;

pub use catalog::{bundled_catalog, load_catalog, CatalogLoadError};
pub use favorites::JsonFileSavedItemStore;
pub use lookup::HttpVehicleLookup;
