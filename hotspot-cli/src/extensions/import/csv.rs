//! Import from a simple csv format logic.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::read_csv_points;

#[cfg(feature = "csv-format")]
mod actual {
    use hotspot_core::models::RawPoint;
    use hotspot_core::utils::Float;
    use hotspot_pragmatic::format::FormatError;
    use std::io::{BufReader, Read};

    const HEADER_NAMES: &[&str] = &["lat", "latitude"];

    fn parse_field(record: &csv::StringRecord, idx: usize) -> Option<Float> {
        record.get(idx).and_then(|field| field.parse::<Float>().ok())
    }

    fn is_header(record: &csv::StringRecord) -> bool {
        record.get(0).is_some_and(|field| HEADER_NAMES.iter().any(|name| field.eq_ignore_ascii_case(name)))
    }

    /// Reads locations from csv with `lat,lng` columns. Header row is optional, extra columns
    /// are ignored and unparseable values are kept as missing coordinates.
    pub fn read_csv_points<R: Read>(reader: BufReader<R>) -> Result<Vec<RawPoint>, FormatError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut points = vec![];

        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|err| {
                FormatError::new_with_details(
                    "E0004".to_string(),
                    "cannot read locations".to_string(),
                    "check locations csv".to_string(),
                    format!("{err}"),
                )
            })?;

            if idx == 0 && is_header(&record) {
                continue;
            }

            points.push(RawPoint::new(parse_field(&record, 0), parse_field(&record, 1)));
        }

        Ok(points)
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use hotspot_core::models::RawPoint;
    use hotspot_pragmatic::format::FormatError;
    use std::io::{BufReader, Read};

    /// A stub method for reading locations from csv format.
    pub fn read_csv_points<R: Read>(_reader: BufReader<R>) -> Result<Vec<RawPoint>, FormatError> {
        Err(FormatError::new(
            "E0004".to_string(),
            "csv format is not supported".to_string(),
            "rebuild with csv-format feature".to_string(),
        ))
    }
}
