use serde::{Deserialize, Serialize};

use crate::ids::VehicleId;
use crate::vehicle::VehicleDetails;

/// Sentinel text for placeholder fields. Never realistic-looking data.
pub const UNKNOWN_TITLE: &str = "Unknown vehicle";
pub const UNKNOWN_VALUE: &str = "Unknown";

/// Which data source supplied a resolved vehicle's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Cached,
    Live,
    Fallback,
    Placeholder,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Cached => "cached",
            Provenance::Live => "live",
            Provenance::Fallback => "fallback",
            Provenance::Placeholder => "placeholder",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display-ready favorite.
///
/// Immutable once built; a new resolution pass produces new values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedVehicle {
    id: VehicleId,
    #[serde(flatten)]
    details: VehicleDetails,
    provenance: Provenance,
    is_placeholder: bool,
}

impl ResolvedVehicle {
    fn sourced(id: VehicleId, details: VehicleDetails, provenance: Provenance) -> Self {
        Self {
            id,
            details,
            provenance,
            is_placeholder: false,
        }
    }

    pub fn cached(id: VehicleId, details: VehicleDetails) -> Self {
        Self::sourced(id, details, Provenance::Cached)
    }

    pub fn live(id: VehicleId, details: VehicleDetails) -> Self {
        Self::sourced(id, details, Provenance::Live)
    }

    pub fn fallback(id: VehicleId, details: VehicleDetails) -> Self {
        Self::sourced(id, details, Provenance::Fallback)
    }

    /// Stand-in for a favorite no source could supply.
    ///
    /// The id is kept verbatim so the caller can still offer remove/refresh.
    pub fn placeholder(id: VehicleId) -> Self {
        Self {
            id,
            details: VehicleDetails {
                title: Some(UNKNOWN_TITLE.to_string()),
                make: Some(UNKNOWN_VALUE.to_string()),
                model: Some(UNKNOWN_VALUE.to_string()),
                ..Default::default()
            },
            provenance: Provenance::Placeholder,
            is_placeholder: true,
        }
    }

    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    pub fn details(&self) -> &VehicleDetails {
        &self.details
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }
}

/// Output of one resolution pass: one vehicle per input reference.
///
/// Non-placeholders come first, then placeholders; the original relative
/// order is kept within each group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedList(Vec<ResolvedVehicle>);

impl ResolvedList {
    /// Stable-partitions `vehicles` so placeholders sort last.
    pub fn partitioned(vehicles: Vec<ResolvedVehicle>) -> Self {
        let (mut resolved, placeholders): (Vec<_>, Vec<_>) = vehicles
            .into_iter()
            .partition(|vehicle| !vehicle.is_placeholder());
        resolved.extend(placeholders);
        Self(resolved)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedVehicle> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ResolvedVehicle] {
        &self.0
    }

    pub fn placeholder_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_placeholder()).count()
    }
}

impl IntoIterator for ResolvedList {
    type Item = ResolvedVehicle;
    type IntoIter = std::vec::IntoIter<ResolvedVehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResolvedList {
    type Item = &'a ResolvedVehicle;
    type IntoIter = std::slice::Iter<'a, ResolvedVehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
