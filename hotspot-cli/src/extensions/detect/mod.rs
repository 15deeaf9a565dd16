//! Detect command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/detect/detect_test.rs"]
mod detect_test;

pub mod config;

use super::import::import_points;
use hotspot_core::detection::detect_clusters;
use hotspot_core::models::{ClusteringMethod, ClusteringParams, Hotspots};
use hotspot_core::utils::{Float, GenericError, InfoLogger};
use hotspot_pragmatic::format::{serialize_centers, serialize_hotspots, serialize_hotspots_as_geojson};
use std::io::{BufReader, BufWriter, Read, Write};
use std::time::Instant;

/// Specifies how detected hotspots are written.
#[derive(Clone, Debug, PartialEq)]
pub enum HotspotsFormat {
    /// A json array of hotspot centers.
    Centers,
    /// A json object with hotspot centers, their sizes and detection statistic.
    Statistic,
    /// A geo json feature collection with hotspot circles of given radius in meters.
    GeoJson {
        /// A circle radius in meters.
        display_radius: Float,
    },
}

/// Reads raw locations from all readers and detects hotspots over the merged list.
pub fn get_hotspots<R: Read>(
    input_format: &str,
    readers: Vec<BufReader<R>>,
    params: &ClusteringParams,
    logger: &InfoLogger,
) -> Result<Hotspots, GenericError> {
    let start = Instant::now();

    let points = readers.into_iter().try_fold(Vec::new(), |mut acc, reader| {
        acc.extend(import_points(input_format, reader)?);
        Ok::<_, GenericError>(acc)
    })?;

    (logger)(&format!("read {} records using {}", points.len(), describe_params(params)));

    let hotspots = detect_clusters(points.as_slice(), params);

    (logger)(&format!(
        "skipped {} malformed records, formed {} clusters, found {} hotspots in {}ms",
        hotspots.skipped,
        hotspots.formed,
        hotspots.clusters.len(),
        start.elapsed().as_millis()
    ));

    Ok(hotspots)
}

/// Writes hotspots in the given format.
pub fn write_hotspots<W: Write>(
    writer: BufWriter<W>,
    hotspots: &Hotspots,
    format: &HotspotsFormat,
) -> Result<(), GenericError> {
    match format {
        HotspotsFormat::Centers => serialize_centers(writer, hotspots.centers().as_slice()),
        HotspotsFormat::Statistic => serialize_hotspots(writer, hotspots),
        HotspotsFormat::GeoJson { display_radius } => serialize_hotspots_as_geojson(writer, hotspots, *display_radius),
    }
    .map_err(|err| format!("cannot write hotspots: '{err}'").into())
}

fn describe_params(params: &ClusteringParams) -> String {
    match params.method() {
        ClusteringMethod::Seeded { radius_km } => {
            format!("seeded clustering (radius: {radius_km}km, min count: {})", params.min_count())
        }
        ClusteringMethod::Grid { precision } => {
            format!("grid clustering (precision: {precision}, min count: {})", params.min_count())
        }
    }
}
