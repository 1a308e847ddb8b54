//! Facility records as served by the external store.
//!
//! The store is the source of truth and is never written to. Records are decoded leniently:
//! unknown columns are ignored, coordinates and ratings may arrive as JSON numbers or numeric
//! strings, and a missing or null specialty list is treated as empty.

use crate::constants::DIRECTIONS_BASE_URL;
use healthassist_types::Coordinate;
use serde::{Deserialize, Deserializer, Serialize};

/// A hospital or clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(deserialize_with = "number_or_text")]
    pub latitude: f64,
    #[serde(deserialize_with = "number_or_text")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub specialty: Vec<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub rating: f64,
    #[serde(default)]
    pub emergency_services: bool,
}

impl Facility {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Driving-directions link for this facility.
    pub fn directions_url(&self) -> String {
        directions_url(self.coordinate())
    }

    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// `"{address}, {city}, {state}"`.
    pub fn display_address(&self) -> String {
        format!("{}, {}, {}", self.address, self.city, self.state)
    }
}

/// Driving-directions link to `destination` on the mapping service.
pub fn directions_url(destination: Coordinate) -> String {
    format!(
        "{}{},{}",
        DIRECTIONS_BASE_URL, destination.latitude, destination.longitude
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(f64),
    Text(String),
}

impl Lenient {
    fn into_number<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Lenient::Number(n) => Ok(n),
            Lenient::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("expected a number, got {s:?}"))),
        }
    }
}

fn number_or_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Lenient::deserialize(deserializer)?.into_number()
}

/// Unrated rows may carry an explicit `null`; they rank like a missing rating.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Lenient>::deserialize(deserializer)? {
        Some(value) => value.into_number(),
        None => Ok(0.0),
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Lenient::deserialize(deserializer)? {
        Lenient::Number(n) => Ok(n.to_string()),
        Lenient::Text(s) => Ok(s),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_store_row_with_extra_columns() {
        let row = r#"{
            "id": "6f1c2a9e-0d55-4c1f-9a57-2b2f3f1e8c11",
            "name": "St Mary's",
            "address": "12 High St",
            "city": "Leeds",
            "state": "West Yorkshire",
            "phone": "0113 000 0000",
            "latitude": 53.8008,
            "longitude": -1.5491,
            "specialty": ["Emergency", "Paediatrics"],
            "rating": 4.6,
            "emergency_services": true,
            "created_at": "2024-05-01T10:00:00Z"
        }"#;

        let f: Facility = serde_json::from_str(row).expect("decode facility");
        assert_eq!(f.name, "St Mary's");
        assert_eq!(f.specialty.len(), 2);
        assert_eq!(f.display_address(), "12 High St, Leeds, West Yorkshire");
        assert_eq!(f.tel_uri(), "tel:0113 000 0000");
    }

    #[test]
    fn accepts_numeric_strings_and_null_specialty() {
        let row = r#"{
            "id": 7,
            "name": "Clinic",
            "latitude": "40.7128",
            "longitude": "-74.0060",
            "specialty": null,
            "rating": "4.0"
        }"#;

        let f: Facility = serde_json::from_str(row).expect("decode facility");
        assert_eq!(f.id, "7");
        assert_eq!(f.latitude, 40.7128);
        assert_eq!(f.longitude, -74.006);
        assert!(f.specialty.is_empty());
        assert_eq!(f.rating, 4.0);
        assert!(!f.emergency_services);
    }

    #[test]
    fn null_rating_decodes_like_missing_rating() {
        let rows = r#"[
            {"id": 1, "name": "Null", "latitude": 1, "longitude": 1, "rating": null},
            {"id": 2, "name": "Missing", "latitude": 1, "longitude": 1}
        ]"#;

        let facilities: Vec<Facility> = serde_json::from_str(rows).expect("decode facilities");
        assert_eq!(facilities[0].rating, 0.0);
        assert_eq!(facilities[1].rating, 0.0);

        let bad = r#"{"id": 3, "name": "Bad", "latitude": 1, "longitude": 1, "rating": "great"}"#;
        assert!(serde_json::from_str::<Facility>(bad).is_err());
    }

    #[test]
    fn rejects_non_numeric_coordinate() {
        let row = r#"{"id": "x", "name": "Clinic", "latitude": "north", "longitude": 1.0}"#;
        let err = serde_json::from_str::<Facility>(row).expect_err("should reject");
        assert!(err.to_string().contains("north"));
    }

    #[test]
    fn directions_url_embeds_coordinate() {
        let f = test_support::facility("a", 40.7128, -74.006, 4.5);
        assert_eq!(
            f.directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=40.7128,-74.006"
        );
    }
}
