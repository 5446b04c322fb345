//! Migration module - schema types, normalization, and config file I/O

pub mod normalize;
pub mod schema;
pub mod store;

pub use normalize::*;
pub use schema::*;
pub use store::*;
