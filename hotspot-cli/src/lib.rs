//! A hotspot detection library public API used by command line interface.

#![warn(missing_docs)]

pub use hotspot_core as core;
pub use hotspot_pragmatic as pragmatic;

pub mod extensions;
