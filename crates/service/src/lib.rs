//! Service layer for the group collection.
//! - `group::repository` is the persistence gateway over the document store.
//! - `group::service` owns the existence checks and field transfer rules.

pub mod errors;
pub mod group;
#[cfg(test)]
pub mod test_support;
