use super::*;
use serde_json::Value;

const PLACES_PATH: &str = "../data/places.json";

fn get_matches(params: &[&str]) -> ArgMatches {
    let args = [&["nearest", PLACES_PATH], params].concat();

    get_nearest_app().try_get_matches_from(args).unwrap()
}

fn run_nearest_to_value(params: &[&str]) -> Result<Value, String> {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = [params, &["--out-result", tmpfile.path().to_str().unwrap()]].concat();

    run_nearest(&get_matches(&args), create_write_buffer)?;

    Ok(serde_json::from_reader(BufReader::new(File::open(tmpfile.path()).unwrap())).unwrap())
}

#[test]
fn can_find_nearest_place_of_type() {
    let value = run_nearest_to_value(&["--lat", "20.0", "--lng", "78.0", "--type", "hospital"]).unwrap();

    assert_eq!(value["name"], "City Hospital");
    assert_eq!(value["lat"], 20.01);
    assert_eq!(value["lng"], 78.0);
    let distance = value["distanceKm"].as_f64().unwrap();
    assert!((distance - 1.112).abs() < 0.001, "unexpected distance: {distance}");
}

#[test]
fn can_match_type_case_insensitive() {
    let value = run_nearest_to_value(&["--lat", "20.0", "--lng", "78.0", "-t", "POLICE"]).unwrap();

    assert_eq!(value["name"], "Central Police Station");
}

#[test]
fn can_return_error_when_nothing_is_nearby() {
    let cases: [&[&str]; 3] = [
        &["--lat", "20.0", "--lng", "78.0", "--type", "hospital", "--max-distance", "0.5"],
        &["--lat", "-33.86", "--lng", "151.2", "--type", "hospital"],
        &["--lat", "20.0", "--lng", "78.0", "--type", "fire"],
    ];

    for args in cases {
        assert_eq!(run_nearest_to_value(args).unwrap_err(), "no nearby locations found");
    }
}

#[test]
fn can_use_default_max_distance() {
    let within = run_nearest_to_value(&["--lat", "20.05", "--lng", "78.0", "--type", "hospital"]).unwrap();
    assert_eq!(within["name"], "City Hospital");

    let beyond = run_nearest_to_value(&["--lat", "20.06", "--lng", "78.0", "--type", "hospital"]);
    assert_eq!(beyond.unwrap_err(), "no nearby locations found");

    let extended =
        run_nearest_to_value(&["--lat", "20.06", "--lng", "78.0", "--type", "hospital", "--max-distance", "6"]).unwrap();
    assert_eq!(extended["name"], "City Hospital");
}

#[test]
fn can_return_error_on_invalid_location() {
    let err = run_nearest_to_value(&["--lat", "91", "--lng", "78.0", "--type", "hospital"]).unwrap_err();

    assert!(err.starts_with("invalid location"), "unexpected error: '{err}'");
}

#[test]
fn can_require_location_and_type() {
    get_nearest_app().try_get_matches_from(vec!["nearest", PLACES_PATH, "--lat", "20.0"]).unwrap_err();
    get_nearest_app().try_get_matches_from(vec!["nearest", PLACES_PATH, "--lat", "20", "--lng", "78"]).unwrap_err();
}
