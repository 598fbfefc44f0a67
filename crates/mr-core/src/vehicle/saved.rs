use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::VehicleId;
use crate::vehicle::VehicleListing;

/// A favorite as saved by the user.
/// 用户保存的收藏项
///
/// `cached_record` is a snapshot taken at save time and may be stale or
/// reduced to a bare id wrapper. The outer `id` is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedReference {
    pub id: VehicleId,

    #[serde(
        default,
        alias = "car",
        deserialize_with = "snapshot_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub cached_record: Option<VehicleListing>,
}

/// A snapshot that cannot be decoded is dropped, so the reference still
/// resolves through the live and fallback sources.
fn snapshot_or_none<'de, D>(deserializer: D) -> Result<Option<VehicleListing>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match serde_json::from_value::<VehicleListing>(raw) {
        Ok(listing) => Ok(Some(listing)),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "discarding undecodable cached snapshot");
            Ok(None)
        }
    }
}

impl SavedReference {
    pub fn new(id: impl Into<VehicleId>) -> Self {
        Self {
            id: id.into(),
            cached_record: None,
        }
    }

    pub fn with_snapshot(id: impl Into<VehicleId>, snapshot: VehicleListing) -> Self {
        Self {
            id: id.into(),
            cached_record: Some(snapshot),
        }
    }

    /// Returns true if the snapshot carries its own id and that id does not
    /// refer to this reference.
    pub fn has_mismatched_snapshot_id(&self) -> bool {
        self.cached_record
            .as_ref()
            .and_then(|record| record.record_id())
            .is_some_and(|record_id| !record_id.matches(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::RecordId;

    #[test]
    fn test_deserializes_car_alias() {
        let reference: SavedReference = serde_json::from_str(
            r#"{"id": "abc", "car": {"_id": "abc", "make": "Ford"}}"#,
        )
        .unwrap();

        let snapshot = reference.cached_record.unwrap();
        assert_eq!(snapshot.details.make.as_deref(), Some("Ford"));
    }

    #[test]
    fn test_bare_reference_has_no_snapshot() {
        let reference: SavedReference = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert!(reference.cached_record.is_none());
        assert!(!reference.has_mismatched_snapshot_id());
    }

    #[test]
    fn test_detects_mismatched_snapshot_id() {
        let snapshot = VehicleListing {
            id: Some(RecordId::Text("other".to_string())),
            ..Default::default()
        };
        let reference = SavedReference::with_snapshot("abc", snapshot);
        assert!(reference.has_mismatched_snapshot_id());
    }

    #[test]
    fn test_undecodable_snapshot_does_not_poison_the_list() {
        let references: Vec<SavedReference> = serde_json::from_str(
            r#"[
                {"id": "a", "car": "not a record"},
                {"id": "b", "car": {"_id": "b", "id": "b", "year": "2020", "mileage": 12000.5}},
                {"id": "c"}
            ]"#,
        )
        .unwrap();

        assert_eq!(references.len(), 3);
        assert!(references[0].cached_record.is_none());
        let snapshot = references[1].cached_record.as_ref().unwrap();
        assert_eq!(snapshot.details.year, Some(2020));
        assert_eq!(snapshot.details.mileage, None);
        assert_eq!(references[2].id.as_str(), "c");
    }

    #[test]
    fn test_object_id_takes_precedence_for_mismatch_check() {
        let snapshot = VehicleListing {
            object_id: Some(RecordId::Text("abc".to_string())),
            id: Some(RecordId::Numeric(3)),
            ..Default::default()
        };
        let reference = SavedReference::with_snapshot("abc", snapshot);
        assert!(!reference.has_mismatched_snapshot_id());
    }

    #[test]
    fn test_numeric_snapshot_id_is_not_a_mismatch() {
        let snapshot = VehicleListing {
            id: Some(RecordId::Numeric(42)),
            ..Default::default()
        };
        let reference = SavedReference::with_snapshot("42", snapshot);
        assert!(!reference.has_mismatched_snapshot_id());
    }
}
