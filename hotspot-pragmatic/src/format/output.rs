#[cfg(test)]
#[path = "../../tests/unit/format/output_test.rs"]
mod output_test;

use hotspot_core::algorithms::geometry::{GeoPoint, create_circle};
use hotspot_core::models::Hotspots;
use hotspot_core::utils::{Float, compare_floats};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::{BufWriter, Error, Write};

/// Amount of segments used to approximate a hotspot circle.
const CIRCLE_SEGMENTS: usize = 32;

const HOTSPOT_COLOR: &str = "red";

#[derive(Clone, Debug, Serialize)]
struct Center {
    lat: Float,
    lng: Float,
}

#[derive(Clone, Debug, Serialize)]
struct HotspotEntry {
    lat: Float,
    lng: Float,
    members: usize,
}

/// Represents statistic of hotspot detection run.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HotspotsStatistic {
    /// Total amount of input records.
    pub total: usize,
    /// Amount of records skipped as malformed.
    pub skipped: usize,
    /// Amount of clusters formed before filtering.
    pub formed: usize,
    /// Amount of reported hotspots.
    pub hotspots: usize,
}

impl From<&Hotspots> for HotspotsStatistic {
    fn from(hotspots: &Hotspots) -> Self {
        Self {
            total: hotspots.total,
            skipped: hotspots.skipped,
            formed: hotspots.formed,
            hotspots: hotspots.clusters.len(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
struct HotspotsReport {
    hotspots: Vec<HotspotEntry>,
    statistic: HotspotsStatistic,
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<(Float, Float)>> },
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
struct Feature {
    pub properties: HashMap<String, String>,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Eq, PartialEq)]
#[serde(tag = "type")]
struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl Eq for Geometry {}

impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        let compare_pair = |l_coord: &(Float, Float), r_coord: &(Float, Float)| {
            compare_floats(l_coord.0, r_coord.0) == Ordering::Equal
                && compare_floats(l_coord.1, r_coord.1) == Ordering::Equal
        };
        let compare_ring = |l_ring: &Vec<(Float, Float)>, r_ring: &Vec<(Float, Float)>| {
            l_ring.len() == r_ring.len() && l_ring.iter().zip(r_ring.iter()).all(|(l, r)| compare_pair(l, r))
        };

        match (self, other) {
            (Geometry::Polygon { coordinates: l_rings }, Geometry::Polygon { coordinates: r_rings }) => {
                l_rings.len() == r_rings.len() && l_rings.iter().zip(r_rings.iter()).all(|(l, r)| compare_ring(l, r))
            }
        }
    }
}

impl Eq for Feature {}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.properties == other.properties && self.geometry == other.geometry
    }
}

/// Serializes hotspot centers as json array of `{ "lat", "lng" }` objects.
pub fn serialize_centers<W: Write>(writer: BufWriter<W>, centers: &[GeoPoint]) -> Result<(), Error> {
    let centers = centers.iter().map(|point| Center { lat: point.lat, lng: point.lng }).collect::<Vec<_>>();

    serde_json::to_writer_pretty(writer, &centers).map_err(Error::from)
}

/// Serializes hotspots with their sizes and detection statistic.
pub fn serialize_hotspots<W: Write>(writer: BufWriter<W>, hotspots: &Hotspots) -> Result<(), Error> {
    let report = HotspotsReport {
        hotspots: hotspots
            .clusters
            .iter()
            .map(|cluster| HotspotEntry { lat: cluster.center.lat, lng: cluster.center.lng, members: cluster.size() })
            .collect(),
        statistic: HotspotsStatistic::from(hotspots),
    };

    serde_json::to_writer_pretty(writer, &report).map_err(Error::from)
}

/// Serializes hotspots into geo json format: each hotspot is a filled circle polygon with
/// `display_radius` in meters around its center.
pub fn serialize_hotspots_as_geojson<W: Write>(
    writer: BufWriter<W>,
    hotspots: &Hotspots,
    display_radius: Float,
) -> Result<(), Error> {
    let geo_json = create_geojson_hotspots(hotspots, display_radius);

    serde_json::to_writer_pretty(writer, &geo_json).map_err(Error::from)
}

fn create_geojson_hotspots(hotspots: &Hotspots, display_radius: Float) -> FeatureCollection {
    FeatureCollection {
        features: hotspots
            .clusters
            .iter()
            .enumerate()
            .map(|(idx, cluster)| {
                let ring = create_circle(&cluster.center, display_radius / 1000., CIRCLE_SEGMENTS)
                    .iter()
                    .map(get_lng_lat)
                    .collect::<Vec<_>>();

                Feature {
                    properties: slice_to_map(&[
                        ("name", format!("hotspot {}", idx + 1).as_str()),
                        ("fill", HOTSPOT_COLOR),
                        ("stroke", HOTSPOT_COLOR),
                        ("radius", display_radius.to_string().as_str()),
                        ("members", cluster.size().to_string().as_str()),
                        ("center", format!("{},{}", cluster.center.lat, cluster.center.lng).as_str()),
                    ]),
                    geometry: Geometry::Polygon { coordinates: vec![ring] },
                }
            })
            .collect(),
    }
}

fn slice_to_map(vec: &[(&str, &str)]) -> HashMap<String, String> {
    vec.iter().map(|&(key, value)| (key.to_string(), value.to_string())).collect()
}

fn get_lng_lat(point: &GeoPoint) -> (Float, Float) {
    (point.lng, point.lat)
}
