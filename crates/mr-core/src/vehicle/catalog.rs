use crate::ids::VehicleId;
use crate::vehicle::VehicleListing;

/// Read-only sample inventory used when live lookups are unavailable.
///
/// Built once at startup and shared behind an `Arc`; lookups never mutate it.
#[derive(Debug, Clone, Default)]
pub struct FallbackCatalog {
    listings: Vec<VehicleListing>,
}

impl FallbackCatalog {
    pub fn new(listings: Vec<VehicleListing>) -> Self {
        Self { listings }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn listings(&self) -> &[VehicleListing] {
        &self.listings
    }

    /// Find the first listing referring to `reference`.
    ///
    /// A listing matches when its id equals the reference (text or numeric
    /// form, see [`crate::RecordId::matches`]) or its VIN equals the
    /// reference verbatim.
    pub fn find(&self, reference: &VehicleId) -> Option<&VehicleListing> {
        let found = self.listings.iter().find(|listing| {
            listing.record_id().is_some_and(|id| id.matches(reference))
                || listing.details.vin.as_deref() == Some(reference.as_str())
        });

        #[cfg(feature = "tracing")]
        tracing::trace!(reference = %reference, hit = found.is_some(), "fallback catalog lookup");

        found
    }
}
