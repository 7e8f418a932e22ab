//! Group collection: persistence gateway, its store implementations, and the service.

pub mod repo;
pub mod repository;
pub mod service;

pub use service::GroupService;
