use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst, VecSkipError};

use crate::ids::RecordId;

/// Descriptive payload of a vehicle listing.
///
/// Every field is optional: the inventory API, cached snapshots and the
/// sample dataset all populate different subsets, and downstream renderers
/// must tolerate any of them being absent.
///
/// Decoding is per field. A value of the wrong JSON type becomes `None`
/// instead of failing the whole record; numbers sent as strings are parsed.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDetails {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde_as(deserialize_as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde_as(deserialize_as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u64>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(
        default,
        alias = "category",
        alias = "bodyType",
        skip_serializing_if = "Option::is_none"
    )]
    pub body_type: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, alias = "fuelType", skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Alternate identifier, matched by the fallback catalog.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, alias = "VIN", skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,

    /// Media URLs on the image CDN. Entries that are not strings are dropped.
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl VehicleDetails {
    /// Returns true if at least one descriptive field carries data.
    ///
    /// Blank strings and an empty image list do not count. Upstream
    /// producers sometimes wrap a bare id in a record shape; such a wrapper
    /// fails this check and must not be treated as a usable snapshot.
    pub fn has_any_descriptive_field(&self) -> bool {
        let texts = [
            &self.title,
            &self.make,
            &self.model,
            &self.body_type,
            &self.fuel_type,
            &self.transmission,
            &self.color,
            &self.location,
            &self.description,
            &self.vin,
        ];

        texts
            .iter()
            .any(|field| field.as_deref().is_some_and(|s| !s.trim().is_empty()))
            || self.year.is_some()
            || self.price.is_some()
            || self.mileage.is_some()
            || !self.images.is_empty()
    }
}

/// A vehicle record as supplied by a data source or a cached snapshot.
///
/// The inventory API keys records by `_id` and some payloads carry a plain
/// `id` as well; both are kept and [`VehicleListing::record_id`] picks one.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleListing {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<RecordId>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(flatten)]
    pub details: VehicleDetails,
}

impl VehicleListing {
    pub fn new(id: Option<RecordId>, details: VehicleDetails) -> Self {
        Self {
            object_id: None,
            id,
            details,
        }
    }

    /// `_id` when present, otherwise `id`.
    pub fn record_id(&self) -> Option<&RecordId> {
        self.object_id.as_ref().or(self.id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id_wrapper_has_no_descriptive_field() {
        let listing: VehicleListing = serde_json::from_str(r#"{"_id": "abc"}"#).unwrap();
        assert_eq!(listing.record_id(), Some(&RecordId::Text("abc".to_string())));
        assert!(!listing.details.has_any_descriptive_field());
    }

    #[test]
    fn test_blank_strings_and_empty_images_do_not_count() {
        let details = VehicleDetails {
            title: Some("  ".to_string()),
            make: Some(String::new()),
            images: vec![],
            ..Default::default()
        };
        assert!(!details.has_any_descriptive_field());
    }

    #[test]
    fn test_single_numeric_field_counts() {
        let details = VehicleDetails {
            price: Some(0.0),
            ..Default::default()
        };
        assert!(details.has_any_descriptive_field());
    }

    #[test]
    fn test_images_alone_count() {
        let details = VehicleDetails {
            images: vec!["https://cdn.example.com/a.jpg".to_string()],
            ..Default::default()
        };
        assert!(details.has_any_descriptive_field());
    }

    #[test]
    fn test_camel_case_aliases_are_accepted() {
        let listing: VehicleListing = serde_json::from_str(
            r#"{
                "id": 9,
                "make": "Honda",
                "bodyType": "SUV",
                "fuelType": "Hybrid",
                "VIN": "1HGCM82633A004352",
                "dealerNotes": "ignored"
            }"#,
        )
        .unwrap();

        assert_eq!(listing.record_id(), Some(&RecordId::Numeric(9)));
        assert_eq!(listing.details.body_type.as_deref(), Some("SUV"));
        assert_eq!(listing.details.fuel_type.as_deref(), Some("Hybrid"));
        assert_eq!(listing.details.vin.as_deref(), Some("1HGCM82633A004352"));
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let listing = VehicleListing::new(
            Some(RecordId::Text("x".to_string())),
            VehicleDetails {
                make: Some("Kia".to_string()),
                ..Default::default()
            },
        );
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json, serde_json::json!({"id": "x", "make": "Kia"}));
    }

    #[test]
    fn test_object_id_and_id_coexist() {
        let listing: VehicleListing =
            serde_json::from_str(r#"{"_id": "64b7f0c2a1d3e4f5a6b7c8d9", "id": 7, "make": "Audi"}"#)
                .unwrap();

        assert_eq!(
            listing.record_id(),
            Some(&RecordId::Text("64b7f0c2a1d3e4f5a6b7c8d9".to_string()))
        );
        assert_eq!(listing.id, Some(RecordId::Numeric(7)));
        assert_eq!(listing.details.make.as_deref(), Some("Audi"));
    }

    #[test]
    fn test_wrongly_typed_fields_become_none() {
        let listing: VehicleListing = serde_json::from_str(
            r#"{
                "id": "a",
                "title": "2020 Kia Soul",
                "mileage": 12000.5,
                "make": {"name": "Kia"},
                "images": [{"url": "https://cdn.example.com/a.jpg"}, "https://cdn.example.com/b.jpg"]
            }"#,
        )
        .unwrap();

        assert_eq!(listing.details.title.as_deref(), Some("2020 Kia Soul"));
        assert_eq!(listing.details.mileage, None);
        assert_eq!(listing.details.make, None);
        assert_eq!(listing.details.images, vec!["https://cdn.example.com/b.jpg"]);
    }

    #[test]
    fn test_numbers_sent_as_strings_are_parsed() {
        let details: VehicleDetails =
            serde_json::from_str(r#"{"year": "2020", "price": "18990.5", "mileage": "oops"}"#)
                .unwrap();

        assert_eq!(details.year, Some(2020));
        assert_eq!(details.price, Some(18990.5));
        assert_eq!(details.mileage, None);
    }
}
