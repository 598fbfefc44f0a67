//! Resolution steps, tried in order for every saved reference:
//!
//! 1. [`try_cached`]: snapshot stored alongside the reference
//! 2. [`try_live`]: inventory API, fanned out for the whole batch
//! 3. [`try_fallback`]: bundled sample catalog
//! 4. [`synthesize_placeholder`]: always succeeds
//!
//! Each step returns `None` to pass to the next one.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use tokio::time::timeout;
use tracing::{debug, warn};

use mr_core::ports::VehicleLookupPort;
use mr_core::{FallbackCatalog, ResolvedVehicle, SavedReference};

use super::ResolverSettings;

/// Use the cached snapshot if it holds real data.
///
/// A snapshot that is only an id wrapper passes, so the reference can still
/// be resolved from a live or fallback source.
pub fn try_cached(reference: &SavedReference) -> Option<ResolvedVehicle> {
    let snapshot = reference.cached_record.as_ref()?;
    if !snapshot.details.has_any_descriptive_field() {
        debug!(id = %reference.id, "cached snapshot has no descriptive fields");
        return None;
    }

    if reference.has_mismatched_snapshot_id() {
        debug!(
            id = %reference.id,
            "cached snapshot id differs from reference id, keeping reference id"
        );
    }

    Some(ResolvedVehicle::cached(
        reference.id.clone(),
        snapshot.details.clone(),
    ))
}

/// Look up every pending reference concurrently.
///
/// `pending` pairs each reference with its slot index in the output. The
/// returned pairs carry the same indices, in completion order; callers write
/// them back by index so the final order never depends on timing. Failures
/// and timeouts become `None` for that index only.
pub async fn try_live(
    lookup: &dyn VehicleLookupPort,
    pending: Vec<(usize, &SavedReference)>,
    settings: &ResolverSettings,
) -> Vec<(usize, Option<ResolvedVehicle>)> {
    let lookup_timeout = settings.lookup_timeout;
    let limit = settings.max_concurrent_lookups.max(1);

    stream::iter(pending)
        .map(|(index, reference)| async move {
            (index, lookup_one(lookup, reference, lookup_timeout).await)
        })
        .buffer_unordered(limit)
        .collect::<Vec<_>>()
        .await
}

async fn lookup_one(
    lookup: &dyn VehicleLookupPort,
    reference: &SavedReference,
    lookup_timeout: Duration,
) -> Option<ResolvedVehicle> {
    match timeout(lookup_timeout, lookup.find_by_id(&reference.id)).await {
        Ok(Ok(Some(listing))) => Some(ResolvedVehicle::live(
            reference.id.clone(),
            listing.details,
        )),
        Ok(Ok(None)) => {
            debug!(id = %reference.id, "live lookup: not found");
            None
        }
        Ok(Err(err)) => {
            warn!(id = %reference.id, error = %err, "live lookup failed");
            None
        }
        Err(_) => {
            warn!(
                id = %reference.id,
                timeout_ms = lookup_timeout.as_millis() as u64,
                "live lookup timed out"
            );
            None
        }
    }
}

/// Match the reference against the sample catalog.
pub fn try_fallback(
    catalog: &FallbackCatalog,
    reference: &SavedReference,
) -> Option<ResolvedVehicle> {
    catalog
        .find(&reference.id)
        .map(|listing| ResolvedVehicle::fallback(reference.id.clone(), listing.details.clone()))
}

/// Last resort: an explicitly marked "unknown" stand-in.
pub fn synthesize_placeholder(reference: &SavedReference) -> ResolvedVehicle {
    debug!(id = %reference.id, "no source had data, using placeholder");
    ResolvedVehicle::placeholder(reference.id.clone())
}
