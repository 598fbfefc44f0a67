//! Port interfaces for the application layer
//!
//! Ports define the contract between the favorites use cases and the
//! infrastructure that talks to the inventory API and persists saved items.
//! Use cases depend only on these traits, never on concrete adapters.

pub mod errors;
mod saved_item_store;
mod vehicle_lookup;

pub use errors::{LookupError, SavedItemStoreError};
pub use saved_item_store::SavedItemStorePort;
pub use vehicle_lookup::VehicleLookupPort;
