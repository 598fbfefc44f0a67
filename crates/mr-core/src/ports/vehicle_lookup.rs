use async_trait::async_trait;

use crate::ids::VehicleId;
use crate::ports::errors::LookupError;
use crate::vehicle::VehicleListing;

#[async_trait]
pub trait VehicleLookupPort: Send + Sync {
    /// Fetch a single vehicle from the live inventory.
    ///
    /// `Ok(None)` is an explicit absence; `Err` is a transient failure.
    async fn find_by_id(&self, id: &VehicleId) -> Result<Option<VehicleListing>, LookupError>;
}
