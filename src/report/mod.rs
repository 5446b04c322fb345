//! Report module - summarizing migration results

pub mod summary;

pub use summary::*;
