//! # mr-core
//!
//! Core domain models and ports for the My Ride favorites resolver.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod ports;
pub mod vehicle;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{RecordId, UserId, VehicleId};
pub use vehicle::{
    FallbackCatalog, Provenance, ResolvedList, ResolvedVehicle, SavedReference, VehicleDetails,
    VehicleListing,
};
