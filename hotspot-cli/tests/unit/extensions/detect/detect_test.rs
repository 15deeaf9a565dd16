use super::*;
use hotspot_core::algorithms::geometry::GeoPoint;
use serde_json::Value;
use std::fs::File;
use std::sync::{Arc, Mutex};

fn create_capturing_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}

fn write_to_value(hotspots: &Hotspots, format: &HotspotsFormat) -> Value {
    let mut buffer = Vec::new();
    write_hotspots(BufWriter::new(&mut buffer), hotspots, format).unwrap();

    serde_json::from_slice(buffer.as_slice()).unwrap()
}

fn detect_reports() -> Hotspots {
    let (logger, _) = create_capturing_logger();
    let reader = BufReader::new(File::open("../data/reports.json").unwrap());

    get_hotspots("json", vec![reader], &ClusteringParams::default(), &logger).unwrap()
}

#[test]
fn can_detect_hotspots_in_json_reports() {
    let (logger, messages) = create_capturing_logger();
    let reader = BufReader::new(File::open("../data/reports.json").unwrap());

    let hotspots = get_hotspots("json", vec![reader], &ClusteringParams::default(), &logger).unwrap();

    assert_eq!(hotspots.centers(), vec![GeoPoint::new(20., 78.)]);
    assert_eq!(hotspots.clusters[0].size(), 6);
    assert_eq!((hotspots.total, hotspots.skipped, hotspots.formed), (13, 5, 2));

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "read 13 records using seeded clustering (radius: 2km, min count: 5)");
    assert!(messages[1].starts_with("skipped 5 malformed records, formed 2 clusters, found 1 hotspots in "));
}

#[test]
fn can_merge_records_from_multiple_readers() {
    let (logger, _) = create_capturing_logger();
    let readers = vec![
        BufReader::new("20.0,78.0\n20.001,78.001\n20.002,78.0\n".as_bytes()),
        BufReader::new("20.0,78.003\n19.999,77.999\n".as_bytes()),
    ];

    let hotspots = get_hotspots("csv", readers, &ClusteringParams::default(), &logger).unwrap();

    assert_eq!(hotspots.total, 5);
    assert_eq!(hotspots.centers(), vec![GeoPoint::new(20., 78.)]);
}

#[test]
fn can_use_grid_clustering() {
    let (logger, messages) = create_capturing_logger();
    let reader = BufReader::new(File::open("../data/locations.csv").unwrap());
    let params = ClusteringParams::grid(2, 5).unwrap();

    let hotspots = get_hotspots("csv", vec![reader], &params, &logger).unwrap();

    assert_eq!(hotspots.centers(), vec![GeoPoint::new(20., 78.)]);
    assert_eq!(hotspots.skipped, 1);
    assert_eq!(messages.lock().unwrap()[0], "read 7 records using grid clustering (precision: 2, min count: 5)");
}

#[test]
fn can_return_error_on_invalid_input() {
    let (logger, _) = create_capturing_logger();

    let cases = [("json", "{ \"lat\": 1 }", "cannot read json"), ("xml", "<points/>", "unknown format")];

    for (format, input, expected) in cases {
        let readers = vec![BufReader::new(input.as_bytes())];

        let err = get_hotspots(format, readers, &ClusteringParams::default(), &logger).unwrap_err();

        assert!(err.to_string().starts_with(expected), "unexpected error: '{err}'");
    }
}

#[test]
fn can_write_centers() {
    let value = write_to_value(&detect_reports(), &HotspotsFormat::Centers);

    assert_eq!(value, serde_json::json!([{ "lat": 20.0, "lng": 78.0 }]));
}

#[test]
fn can_write_statistic() {
    let value = write_to_value(&detect_reports(), &HotspotsFormat::Statistic);

    assert_eq!(value["hotspots"], serde_json::json!([{ "lat": 20.0, "lng": 78.0, "members": 6 }]));
    assert_eq!(value["statistic"], serde_json::json!({ "total": 13, "skipped": 5, "formed": 2, "hotspots": 1 }));
}

#[test]
fn can_write_geojson() {
    let value = write_to_value(&detect_reports(), &HotspotsFormat::GeoJson { display_radius: 500. });

    assert_eq!(value["type"], "FeatureCollection");
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["geometry"]["type"], "Polygon");
    assert_eq!(features[0]["properties"]["radius"], "500");
    assert_eq!(features[0]["properties"]["members"], "6");
}
