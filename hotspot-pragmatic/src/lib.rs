//! Pragmatic crate adapts loosely typed incident report records into well typed points and writes
//! detected hotspots in json or geojson formats, ready to be rendered on a map.
//!

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub use hotspot_core as core;

pub mod format;
