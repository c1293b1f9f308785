//! Flat JSON records for the domain types.
//!
//! Catalog documents and requests carry latitude and longitude as separate
//! keys; the domain types hold a single optional [`Coord`].

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::{Attraction, PlanRequest};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct AttractionRecord {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    duration_mins: Option<u32>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    img: Option<String>,
}

impl From<AttractionRecord> for Attraction {
    fn from(record: AttractionRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            category: record.category.unwrap_or_default(),
            location: coord_from(record.lat, record.lon),
            duration_mins: record.duration_mins,
            rating: record.rating,
            img: record.img,
        }
    }
}

impl From<Attraction> for AttractionRecord {
    fn from(attraction: Attraction) -> Self {
        Self {
            lat: attraction.latitude(),
            lon: attraction.longitude(),
            id: attraction.id,
            name: attraction.name,
            category: Some(attraction.category),
            duration_mins: attraction.duration_mins,
            rating: attraction.rating,
            img: attraction.img,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct LatLon {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PlanRequestRecord {
    #[serde(default = "default_days")]
    days: u32,
    #[serde(default)]
    preferences: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    origin: Option<LatLon>,
}

const fn default_days() -> u32 {
    1
}

impl From<PlanRequestRecord> for PlanRequest {
    fn from(record: PlanRequestRecord) -> Self {
        Self {
            days: record.days,
            preferences: record.preferences,
            origin: record.origin.map(|LatLon { lat, lon }| Coord { x: lon, y: lat }),
        }
    }
}

impl From<PlanRequest> for PlanRequestRecord {
    fn from(request: PlanRequest) -> Self {
        Self {
            days: request.days,
            preferences: request.preferences,
            origin: request.origin.map(|coord| LatLon {
                lat: coord.y,
                lon: coord.x,
            }),
        }
    }
}

fn coord_from(lat: Option<f64>, lon: Option<f64>) -> Option<Coord<f64>> {
    lat.zip(lon).map(|(y, x)| Coord { x, y })
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "tests should fail fast on bad JSON")]

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn attraction_reads_flat_coordinates() {
        let json = r#"{"id":"a2","name":"Dassam Falls","category":"nature","lat":23.2,"lon":85.6,"duration_mins":90,"rating":4.8}"#;
        let attraction: Attraction = serde_json::from_str(json).expect("valid attraction");
        assert_eq!(attraction.location, Some(Coord { x: 85.6, y: 23.2 }));
        assert_eq!(attraction.duration_mins, Some(90));
        assert!(attraction.img.is_none());
    }

    #[rstest]
    fn attraction_with_half_a_coordinate_has_no_location() {
        let json = r#"{"id":"a9","name":"Somewhere","lat":23.2}"#;
        let attraction: Attraction = serde_json::from_str(json).expect("valid attraction");
        assert!(attraction.location.is_none());
        assert!(attraction.category.is_empty());
    }

    #[rstest]
    fn attraction_ignores_foreign_keys() {
        let json = r#"{"_id":"665f","__v":0,"name":"Sun Temple","category":"heritage"}"#;
        let attraction: Attraction = serde_json::from_str(json).expect("valid attraction");
        assert_eq!(attraction.name, "Sun Temple");
        assert!(attraction.id.is_empty());
    }

    #[rstest]
    fn request_defaults_to_one_day_without_preferences() {
        let request: PlanRequest = serde_json::from_str("{}").expect("valid request");
        assert_eq!(request.days, 1);
        assert!(request.preferences.is_empty());
        assert!(request.origin.is_none());
    }

    #[rstest]
    fn request_reads_origin() {
        let json = r#"{"days":2,"preferences":["nature"],"origin":{"lat":23.4,"lon":85.5}}"#;
        let request: PlanRequest = serde_json::from_str(json).expect("valid request");
        assert_eq!(request.origin, Some(Coord { x: 85.5, y: 23.4 }));
    }

    #[rstest]
    #[case(r#"{"days":1.5}"#)]
    #[case(r#"{"days":-1}"#)]
    #[case(r#"{"days":"two"}"#)]
    #[case(r#"{"preferences":"nature"}"#)]
    fn request_rejects_malformed_fields(#[case] json: &str) {
        assert!(serde_json::from_str::<PlanRequest>(json).is_err());
    }
}
