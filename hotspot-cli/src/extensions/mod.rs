//! Module provides various helper functionality.

pub mod detect;
pub mod import;
