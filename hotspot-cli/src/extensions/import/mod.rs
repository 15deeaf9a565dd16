//! Import command helpers

mod csv;
pub use self::csv::*;

use hotspot_core::models::RawPoint;
use hotspot_core::utils::GenericError;
use hotspot_pragmatic::format::read_points;
use std::io::{BufReader, Read};

/// Supported input formats.
pub const INPUT_FORMATS: &[&str] = &["json", "csv"];

/// Reads raw locations from specific format.
pub fn import_points<R: Read>(input_format: &str, reader: BufReader<R>) -> Result<Vec<RawPoint>, GenericError> {
    match input_format {
        "json" => read_points(reader).map_err(|err| format!("cannot read json: {err}").into()),
        "csv" => read_csv_points(reader).map_err(|err| format!("cannot read csv: {err}").into()),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}
