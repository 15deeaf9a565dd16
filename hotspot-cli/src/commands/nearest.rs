#[cfg(test)]
#[path = "../../tests/unit/commands/nearest_test.rs"]
mod nearest_test;

use super::*;
use hotspot_cli::core::algorithms::geometry::GeoPoint;
use hotspot_cli::pragmatic::format::{find_nearest_place, read_places};
use std::io::BufReader;

const PLACES_ARG_NAME: &str = "PLACES";
const LAT_ARG_NAME: &str = "lat";
const LNG_ARG_NAME: &str = "lng";
const TYPE_ARG_NAME: &str = "type";
const MAX_DISTANCE_ARG_NAME: &str = "max-distance";
const OUT_RESULT_ARG_NAME: &str = "out-result";

const DEFAULT_MAX_DISTANCE_KM: f64 = 5.;

pub fn get_nearest_app() -> Command {
    Command::new("nearest")
        .about("Finds the nearest place of specific type around given location")
        .arg(Arg::new(PLACES_ARG_NAME).help("Sets places file in json format").required(true).index(1))
        .arg(
            Arg::new(LAT_ARG_NAME)
                .help("Specifies latitude of the location")
                .long(LAT_ARG_NAME)
                .allow_negative_numbers(true)
                .required(true),
        )
        .arg(
            Arg::new(LNG_ARG_NAME)
                .help("Specifies longitude of the location")
                .long(LNG_ARG_NAME)
                .allow_negative_numbers(true)
                .required(true),
        )
        .arg(
            Arg::new(TYPE_ARG_NAME)
                .help("Specifies place type, e.g. hospital or police")
                .short('t')
                .long(TYPE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MAX_DISTANCE_ARG_NAME)
                .help("Specifies max search distance in kilometers, default is 5")
                .long(MAX_DISTANCE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_nearest(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let places_path = matches.get_one::<String>(PLACES_ARG_NAME).ok_or("no places file")?;
    let places = read_places(BufReader::new(open_file(places_path, "places")?))
        .map_err(|err| format!("cannot read places: {err}"))?;

    let lat = parse_float_value::<f64>(matches, LAT_ARG_NAME, "latitude")?.ok_or("no latitude")?;
    let lng = parse_float_value::<f64>(matches, LNG_ARG_NAME, "longitude")?.ok_or("no longitude")?;
    let target = GeoPoint::try_new(lat, lng).ok_or_else(|| format!("invalid location: '{lat},{lng}'"))?;

    let kind = matches.get_one::<String>(TYPE_ARG_NAME).ok_or("no place type")?;
    let max_distance =
        parse_float_value::<f64>(matches, MAX_DISTANCE_ARG_NAME, "max distance")?.unwrap_or(DEFAULT_MAX_DISTANCE_KM);
    if !max_distance.is_finite() || max_distance < 0. {
        return Err(format!("max distance should be a non-negative number of kilometers, got: '{max_distance}'"));
    }

    let nearest = find_nearest_place(places.as_slice(), &target, kind, max_distance)
        .ok_or_else(|| "no nearby locations found".to_string())?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut writer = out_writer_func(out_result);
    serde_json::to_writer_pretty(&mut writer, &nearest).map_err(|err| format!("cannot write nearest place: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot write nearest place: '{err}'"))
}
