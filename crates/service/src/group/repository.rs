use async_trait::async_trait;
use models::group::Group;

use crate::errors::ServiceError;

/// Persistence gateway for the group collection.
///
/// Implementations talk to durable storage directly; nothing is cached.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Upsert by `id`. Saving the same group twice leaves one document.
    async fn save(&self, group: Group) -> Result<Group, ServiceError>;
    /// Every document, in no particular order. Empty collection yields an empty vec.
    async fn find_all(&self) -> Result<Vec<Group>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Group>, ServiceError>;
    /// Callers check existence first; removing a missing id is not guaranteed to be a no-op.
    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError>;
}

/// In-process store with the same semantics as the MongoDB gateway.
/// Backs the `memory` storage backend and the tests.
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryGroupRepository {
        groups: RwLock<HashMap<String, Group>>, // key: group id
    }

    impl InMemoryGroupRepository {
        pub fn new() -> Self { Self::default() }

        pub async fn len(&self) -> usize {
            self.groups.read().await.len()
        }
    }

    #[async_trait]
    impl GroupRepository for InMemoryGroupRepository {
        async fn save(&self, group: Group) -> Result<Group, ServiceError> {
            let mut groups = self.groups.write().await;
            groups.insert(group.id.clone(), group.clone());
            Ok(group)
        }

        async fn find_all(&self) -> Result<Vec<Group>, ServiceError> {
            let groups = self.groups.read().await;
            Ok(groups.values().cloned().collect())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Group>, ServiceError> {
            let groups = self.groups.read().await;
            Ok(groups.get(id).cloned())
        }

        async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
            let mut groups = self.groups.write().await;
            groups.remove(id);
            Ok(())
        }
    }

}
