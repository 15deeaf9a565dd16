#[cfg(test)]
#[path = "../../tests/unit/format/places_test.rs"]
mod places_test;

use super::FormatError;
use hotspot_core::algorithms::geometry::{GeoPoint, find_nearest};
use hotspot_core::utils::Float;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// Represents a facility which can be looked up near a reported location.
#[derive(Clone, Debug, Deserialize)]
pub struct Place {
    /// A display name.
    pub name: String,
    /// A facility type, e.g. hospital or police.
    #[serde(rename = "type")]
    pub kind: String,
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lng: Float,
}

impl Place {
    /// Returns location of the place.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Represents the closest place found for a given location.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestPlace {
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lng: Float,
    /// A display name.
    pub name: String,
    /// Haversine distance in kilometers.
    pub distance_km: Float,
}

/// Reads places from json array. Unlike report records, places are curated data: a place with
/// invalid coordinates is an error.
pub fn read_places<R: Read>(reader: BufReader<R>) -> Result<Vec<Place>, FormatError> {
    let places: Vec<Place> = serde_json::from_reader(reader).map_err(|err| {
        FormatError::new_with_details(
            "E0003".to_string(),
            "cannot deserialize places".to_string(),
            "check places json".to_string(),
            err.to_string(),
        )
    })?;

    let invalid = places
        .iter()
        .filter(|place| GeoPoint::try_new(place.lat, place.lng).is_none())
        .map(|place| place.name.as_str())
        .collect::<Vec<_>>();

    if invalid.is_empty() {
        Ok(places)
    } else {
        Err(FormatError::new_with_details(
            "E0003".to_string(),
            "places have invalid coordinates".to_string(),
            "check latitude and longitude ranges of places".to_string(),
            invalid.join(", "),
        ))
    }
}

/// Finds the nearest place of given `kind` within `max_distance_km` from `target`.
pub fn find_nearest_place(
    places: &[Place],
    target: &GeoPoint,
    kind: &str,
    max_distance_km: Float,
) -> Option<NearestPlace> {
    let candidates = places
        .iter()
        .filter(|place| place.kind.eq_ignore_ascii_case(kind))
        .map(|place| (place.location(), place))
        .collect::<Vec<_>>();

    find_nearest(target, candidates.iter(), |candidate| &candidate.0, Some(max_distance_km)).map(
        |((location, place), distance_km)| NearestPlace {
            lat: location.lat,
            lng: location.lng,
            name: place.name.clone(),
            distance_km,
        },
    )
}
