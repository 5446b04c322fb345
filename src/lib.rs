//! Linkmig: Shortcut Link Config Migration Library
//!
//! A library for migrating `.links.json` shortcut configuration files
//! to the current schema version, built around a generic line-based
//! option selector and a field-by-field config normalizer.

pub mod cli;
pub mod migrate;
pub mod report;
pub mod utils;
