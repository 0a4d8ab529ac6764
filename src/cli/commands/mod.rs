//! CLI command implementations.

pub mod summary;
pub mod validate;
