//! Shared building blocks for the service crates: response types and logging setup.

pub mod types;
pub mod utils;
