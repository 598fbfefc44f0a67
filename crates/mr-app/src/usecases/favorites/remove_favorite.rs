use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use mr_core::ports::SavedItemStorePort;
use mr_core::{UserId, VehicleId};

use super::FavoriteCommandError;

/// Drop a vehicle from the user's favorites. This is also how a
/// placeholder entry gets cleared.
pub struct RemoveFavorite {
    store: Arc<dyn SavedItemStorePort>,
}

impl RemoveFavorite {
    pub fn new(store: Arc<dyn SavedItemStorePort>) -> Self {
        Self { store }
    }

    /// Returns `false` if the vehicle was not saved.
    pub async fn execute(
        &self,
        user: &UserId,
        id: &VehicleId,
    ) -> Result<bool, FavoriteCommandError> {
        let span = info_span!("usecase.remove_favorite.execute", user = %user, id = %id);

        async {
            if id.is_blank() {
                return Err(FavoriteCommandError::BlankVehicleId);
            }

            let removed = self.store.remove(user, id).await?;
            info!(removed, "favorite removed");
            Ok::<_, FavoriteCommandError>(removed)
        }
        .instrument(span)
        .await
    }
}
