//! Core crate contains building blocks to detect ***geospatial hotspots*** in a set of reported
//! incident locations.
//!
//! # Examples
//!
//! ```
//! use hotspot_core::prelude::*;
//!
//! let points = (0..5).map(|idx| RawPoint::from((20. + idx as f64 * 0.001, 78.))).collect::<Vec<_>>();
//!
//! let centers = detect_hotspots(points.as_slice(), 2., 5).unwrap();
//!
//! assert_eq!(centers, vec![GeoPoint::new(20., 78.)]);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub mod algorithms;
pub mod detection;
pub mod models;
pub mod prelude;
pub mod utils;
