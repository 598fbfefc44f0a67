use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use mr_core::ports::VehicleLookupPort;
use mr_core::{FallbackCatalog, ResolvedList, ResolvedVehicle, SavedReference};

use super::strategies::{synthesize_placeholder, try_cached, try_fallback, try_live};
use super::{ResolveOptions, ResolverSettings};

/// Error type for caller defects. Missing data is never an error here.
#[derive(Debug, thiserror::Error)]
pub enum ResolveFavoritesError {
    #[error("saved reference at index {index} has a blank id")]
    InvalidReference { index: usize },
}

/// Turn saved references into display-ready vehicles.
/// 将收藏引用解析为可展示的车辆列表
///
/// # Behavior
/// - One output vehicle per input reference, duplicates included
/// - Per reference: cached snapshot → live lookup → fallback catalog → placeholder
/// - Lookups for the batch run concurrently; each writes its own slot
/// - Placeholders are moved after real vehicles, order kept in both groups
///
/// No result is written back to the saved-item store.
pub struct ResolveFavorites {
    lookup: Arc<dyn VehicleLookupPort>,
    catalog: Arc<FallbackCatalog>,
    settings: ResolverSettings,
}

impl ResolveFavorites {
    pub fn new(
        lookup: Arc<dyn VehicleLookupPort>,
        catalog: Arc<FallbackCatalog>,
        settings: ResolverSettings,
    ) -> Self {
        Self {
            lookup,
            catalog,
            settings,
        }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolve `references` in one pass.
    ///
    /// # Errors
    ///
    /// Only [`ResolveFavoritesError::InvalidReference`] when a reference id is
    /// blank. Unreachable or unknown vehicles resolve to placeholders.
    pub async fn execute(
        &self,
        references: &[SavedReference],
        options: ResolveOptions,
    ) -> Result<ResolvedList, ResolveFavoritesError> {
        let span = info_span!(
            "usecase.resolve_favorites.execute",
            count = references.len(),
            lookup_available = options.lookup_available,
        );

        async move {
            if let Some(index) = references.iter().position(|r| r.id.is_blank()) {
                return Err(ResolveFavoritesError::InvalidReference { index });
            }

            let mut slots: Vec<Option<ResolvedVehicle>> =
                references.iter().map(try_cached).collect();

            if options.lookup_available {
                let pending: Vec<(usize, &SavedReference)> = slots
                    .iter()
                    .zip(references)
                    .enumerate()
                    .filter(|(_, (slot, _))| slot.is_none())
                    .map(|(index, (_, reference))| (index, reference))
                    .collect();

                if !pending.is_empty() {
                    debug!(pending = pending.len(), "dispatching live lookups");
                    for (index, resolved) in
                        try_live(self.lookup.as_ref(), pending, &self.settings).await
                    {
                        slots[index] = resolved;
                    }
                }
            }

            let resolved: Vec<ResolvedVehicle> = slots
                .into_iter()
                .zip(references)
                .map(|(slot, reference)| {
                    slot.or_else(|| try_fallback(&self.catalog, reference))
                        .unwrap_or_else(|| synthesize_placeholder(reference))
                })
                .collect();

            let list = ResolvedList::partitioned(resolved);
            info!(
                resolved = list.len(),
                placeholders = list.placeholder_count(),
                "favorites resolved"
            );
            Ok(list)
        }
        .instrument(span)
        .await
    }
}
