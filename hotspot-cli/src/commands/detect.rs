#[cfg(test)]
#[path = "../../tests/unit/commands/detect_test.rs"]
mod detect_test;

use super::*;
use hotspot_cli::extensions::detect::config::*;
use hotspot_cli::extensions::detect::{HotspotsFormat, get_hotspots, write_hotspots};
use hotspot_cli::extensions::import::INPUT_FORMATS;
use std::io::BufReader;

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "INPUT";
const CONFIG_ARG_NAME: &str = "config";
const METHOD_ARG_NAME: &str = "method";
const RADIUS_ARG_NAME: &str = "radius";
const MIN_COUNT_ARG_NAME: &str = "min-count";
const PRECISION_ARG_NAME: &str = "precision";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const GEO_JSON_ARG_NAME: &str = "geo-json";
const DISPLAY_RADIUS_ARG_NAME: &str = "display-radius";
const STATISTIC_ARG_NAME: &str = "with-statistic";
const LOG_ARG_NAME: &str = "log";

pub fn get_detect_app() -> Command {
    Command::new("detect")
        .about("Detects hotspots in reported locations")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input type")
                .required(true)
                .value_parser(INPUT_FORMATS.to_vec())
                .index(1),
        )
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input files with reported locations, records from all files are merged")
                .required(true)
                .num_args(1..)
                .index(2),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json file with detection configuration")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(METHOD_ARG_NAME)
                .help("Specifies clustering method")
                .short('m')
                .long(METHOD_ARG_NAME)
                .value_parser(["seeded", "grid"])
                .required(false),
        )
        .arg(
            Arg::new(RADIUS_ARG_NAME)
                .help("Specifies clustering radius in kilometers for seeded method")
                .short('r')
                .long(RADIUS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MIN_COUNT_ARG_NAME)
                .help("Specifies minimum amount of reports in a hotspot")
                .short('n')
                .long(MIN_COUNT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PRECISION_ARG_NAME)
                .help("Specifies amount of decimal places for grid method")
                .short('p')
                .long(PRECISION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GEO_JSON_ARG_NAME)
                .help("Specifies path to file for hotspot circles output in geojson format")
                .short('g')
                .long(GEO_JSON_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DISPLAY_RADIUS_ARG_NAME)
                .help("Specifies radius of rendered hotspot circles in meters")
                .short('d')
                .long(DISPLAY_RADIUS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(STATISTIC_ARG_NAME)
                .help("Writes hotspot sizes and detection statistic instead of plain centers")
                .short('s')
                .long(STATISTIC_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether detection progress should be logged to stderr")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_detect(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("no input format")?;
    let readers = matches
        .get_many::<String>(INPUT_ARG_NAME)
        .ok_or("no input files")?
        .map(|path| open_file(path, "input").map(BufReader::new))
        .collect::<Result<Vec<_>, _>>()?;

    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let overrides = ConfigOverrides {
        method: matches.get_one::<String>(METHOD_ARG_NAME).cloned(),
        radius_km: parse_float_value(matches, RADIUS_ARG_NAME, "clustering radius")?,
        min_count: parse_int_value(matches, MIN_COUNT_ARG_NAME, "min count")?,
        precision: parse_int_value(matches, PRECISION_ARG_NAME, "grid precision")?,
    };
    let params = create_params(&config, &overrides).map_err(|err| format!("invalid configuration: {err}"))?;
    let display_radius = parse_float_value(matches, DISPLAY_RADIUS_ARG_NAME, "display radius")?;
    let display_radius = get_display_radius(&config, display_radius).map_err(|err| err.to_string())?;

    let logger = create_logger(matches.get_flag(LOG_ARG_NAME) || is_logging_enabled(&config));

    let hotspots = get_hotspots(input_format, readers, &params, &logger)
        .map_err(|err| format!("cannot detect hotspots: '{err}'"))?;

    let format = if matches.get_flag(STATISTIC_ARG_NAME) { HotspotsFormat::Statistic } else { HotspotsFormat::Centers };
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    write_hotspots(out_writer_func(out_result), &hotspots, &format).map_err(|err| err.to_string())?;

    if let Some(path) = matches.get_one::<String>(GEO_JSON_ARG_NAME) {
        let geo_json = create_file(path, "geojson")?;
        write_hotspots(BufWriter::new(geo_json), &hotspots, &HotspotsFormat::GeoJson { display_radius })
            .map_err(|err| err.to_string())?;
    }

    Ok(())
}
