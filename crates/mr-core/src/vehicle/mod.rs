//! Vehicle favorites domain: saved references, listings and resolution output.

mod catalog;
mod details;
mod resolved;
mod saved;

pub use catalog::FallbackCatalog;
pub use details::{VehicleDetails, VehicleListing};
pub use resolved::{Provenance, ResolvedList, ResolvedVehicle, UNKNOWN_TITLE, UNKNOWN_VALUE};
pub use saved::SavedReference;
