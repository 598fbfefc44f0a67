use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use mr_core::ports::SavedItemStorePort;
use mr_core::{SavedReference, UserId, VehicleId, VehicleListing};

use super::FavoriteCommandError;

/// Save a vehicle to the user's favorites, optionally with a snapshot of
/// its current listing for later offline display.
pub struct AddFavorite {
    store: Arc<dyn SavedItemStorePort>,
}

impl AddFavorite {
    pub fn new(store: Arc<dyn SavedItemStorePort>) -> Self {
        Self { store }
    }

    /// Returns `false` if the vehicle was already saved.
    pub async fn execute(
        &self,
        user: &UserId,
        id: VehicleId,
        snapshot: Option<VehicleListing>,
    ) -> Result<bool, FavoriteCommandError> {
        let span = info_span!("usecase.add_favorite.execute", user = %user, id = %id);

        async {
            if id.is_blank() {
                return Err(FavoriteCommandError::BlankVehicleId);
            }

            let reference = SavedReference {
                id,
                cached_record: snapshot,
            };
            let added = self.store.add(user, reference).await?;
            info!(added, "favorite saved");
            Ok::<_, FavoriteCommandError>(added)
        }
        .instrument(span)
        .await
    }
}
