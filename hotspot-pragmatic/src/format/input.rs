#[cfg(test)]
#[path = "../../tests/unit/format/input_test.rs"]
mod input_test;

use super::FormatError;
use hotspot_core::models::RawPoint;
use hotspot_core::utils::Float;
use serde_json::{Map, Value};
use std::io::{BufReader, Read};

const LATITUDE_KEYS: &[&str] = &["lat", "latitude"];
const LONGITUDE_KEYS: &[&str] = &["lng", "lon", "longitude"];
const LOCATION_KEY: &str = "location";

/// Reads a json array of loosely typed records and adapts each of them to `RawPoint`. Records
/// without usable coordinates are kept as incomplete points: their validation is left to the
/// detection step. Fails only when input is not a valid json array.
pub fn read_points<R: Read>(reader: BufReader<R>) -> Result<Vec<RawPoint>, FormatError> {
    let value: Value = serde_json::from_reader(reader).map_err(|err| {
        FormatError::new_with_details(
            "E0001".to_string(),
            "cannot deserialize input records".to_string(),
            "check input json".to_string(),
            err.to_string(),
        )
    })?;

    match value {
        Value::Array(records) => Ok(records.iter().map(parse_record).collect()),
        other => Err(FormatError::new(
            "E0002".to_string(),
            format!("expected an array of records, got: '{}'", get_type_name(&other)),
            "wrap records into json array".to_string(),
        )),
    }
}

/// Adapts a single record to `RawPoint`. Report documents keep their coordinates in a nested
/// `location` object, flat records keep them on the top level. Only json numbers are accepted.
pub fn parse_record(record: &Value) -> RawPoint {
    let Some(fields) = record.as_object() else {
        return RawPoint::default();
    };

    let fields = match fields.get(LOCATION_KEY) {
        Some(Value::Object(location)) => location,
        _ => fields,
    };

    RawPoint::new(get_number(fields, LATITUDE_KEYS), get_number(fields, LONGITUDE_KEYS))
}

fn get_number(fields: &Map<String, Value>, keys: &[&str]) -> Option<Float> {
    keys.iter().find_map(|key| fields.get(*key)).and_then(Value::as_f64)
}

fn get_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
