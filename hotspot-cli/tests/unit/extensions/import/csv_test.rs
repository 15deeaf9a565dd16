use super::*;
use hotspot_core::models::RawPoint;
use hotspot_pragmatic::format::FormatError;
use std::fs::File;
use std::io::BufReader;

fn read(csv: &str) -> Result<Vec<RawPoint>, FormatError> {
    read_csv_points(BufReader::new(csv.as_bytes()))
}

#[test]
fn can_read_headerless_locations() {
    let points = read("20.0,78.0\n20.001,78.001\n").unwrap();

    assert_eq!(points, vec![RawPoint::new(Some(20.), Some(78.)), RawPoint::new(Some(20.001), Some(78.001))]);
}

#[test]
fn can_skip_header_row() {
    for header in ["lat,lng", "Latitude,Longitude", " lat , lon "] {
        let points = read(&format!("{header}\n10.5,20.5\n")).unwrap();

        assert_eq!(points, vec![RawPoint::new(Some(10.5), Some(20.5))], "header: '{header}'");
    }
}

#[test]
fn can_keep_unparseable_values_as_missing() {
    let points = read("abc,78.0\n20.0\n20.0,,extra\n 1.5 , 2.5 ,comment\n").unwrap();

    assert_eq!(
        points,
        vec![
            RawPoint::new(None, Some(78.)),
            RawPoint::new(Some(20.), None),
            RawPoint::new(Some(20.), None),
            RawPoint::new(Some(1.5), Some(2.5)),
        ]
    );
}

#[test]
fn can_read_empty_input() {
    assert!(read("").unwrap().is_empty());
}

#[test]
fn can_return_error_on_invalid_utf8() {
    let bytes: &[u8] = &[b'2', b'0', b',', 0xff, 0xfe, b'\n'];

    let err = read_csv_points(BufReader::new(bytes)).unwrap_err();

    assert_eq!(err.code, "E0004");
}

#[test]
fn can_read_locations_file() {
    let file = File::open("../data/locations.csv").unwrap();

    let points = read_csv_points(BufReader::new(file)).unwrap();

    assert_eq!(points.len(), 7);
    assert_eq!(points.first(), Some(&RawPoint::new(Some(20.), Some(78.))));
    assert_eq!(points.last(), Some(&RawPoint::new(None, Some(78.))));
}
