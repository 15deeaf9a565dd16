//! This module defines logic to read loosely typed report records and places from json input and
//! to write detected hotspots.

use serde::Serialize;
use std::fmt;

mod input;
pub use self::input::{parse_record, read_points};

mod output;
pub use self::output::{HotspotsStatistic, serialize_centers, serialize_hotspots, serialize_hotspots_as_geojson};

mod places;
pub use self::places::{NearestPlace, Place, find_nearest_place, read_places};

/// A format error.
#[derive(Clone, Debug, Serialize)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}
