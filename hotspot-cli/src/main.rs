//! A command line interface to detect hotspots in reported incident locations.
//!
//! ## Usage
//!
//! - detect hotspots in json reports using default settings (radius 2km, at least 5 reports)
//!
//!     `hotspot-cli detect json reports.json`
//!
//! - detect hotspots in several csv files with custom radius, writing geojson circles
//!
//!     `hotspot-cli detect csv north.csv south.csv --radius 1.5 --geo-json hotspots.geojson`
//!
//! - find the nearest hospital within 5km
//!
//!     `hotspot-cli nearest places.json --lat 20.0 --lng 78.0 --type hospital`
//!
//! For more details, simply run
//!
//!     hotspot-cli --help

mod commands;

use self::commands::create_write_buffer;
use self::commands::detect::{get_detect_app, run_detect};
use self::commands::nearest::{get_nearest_app, run_nearest};
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Hotspot Detection")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to detect hotspots in reported incident locations")
        .subcommand(get_detect_app())
        .subcommand(get_nearest_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("detect", detect_matches)) => run_detect(detect_matches, create_write_buffer),
        Some(("nearest", nearest_matches)) => run_nearest(nearest_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
