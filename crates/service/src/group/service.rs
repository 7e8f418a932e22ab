use std::sync::Arc;

use models::group::{generate_id, Group, GroupInput};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::group::repository::GroupRepository;

pub const DELETE_MISSING_MSG: &str = "this id does not exist to delete a group";
pub const UPDATE_MISSING_MSG: &str = "this id does not exist to update a group";

/// Group business service, independent of the web framework.
///
/// Owns the existence checks for id-addressed writes; everything else is a
/// straight pass-through to the repository.
pub struct GroupService<R: GroupRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: GroupRepository + ?Sized> GroupService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a group built from `input`.
    ///
    /// There is no uniqueness check: an existing id is overwritten. A missing
    /// or blank id gets a freshly generated one.
    ///
    /// # Examples
    /// ```
    /// use service::group::{GroupService, repository::memory::InMemoryGroupRepository};
    /// use models::group::GroupInput;
    /// use std::sync::Arc;
    /// let svc = GroupService::new(Arc::new(InMemoryGroupRepository::new()));
    /// let input = GroupInput {
    ///     id: Some("g1".into()),
    ///     name: "A".into(),
    ///     genre: "Rock".into(),
    ///     formation_date: chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
    /// };
    /// let group = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(group.id, "g1");
    /// ```
    #[instrument(skip(self, input), fields(requested_id = ?input.id))]
    pub async fn create(&self, input: GroupInput) -> Result<Group, ServiceError> {
        let id = input.requested_id().map(str::to_string).unwrap_or_else(generate_id);
        let group = self.repo.save(Group::from_input(id, input)).await?;
        info!(id = %group.id, "group_created");
        Ok(group)
    }

    /// All groups, or `None` when the collection is empty.
    pub async fn list_all(&self) -> Result<Option<Vec<Group>>, ServiceError> {
        let groups = self.repo.find_all().await?;
        if groups.is_empty() {
            return Ok(None);
        }
        Ok(Some(groups))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Group>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            warn!("delete of unknown group id");
            return Err(ServiceError::NotFound(DELETE_MISSING_MSG.into()));
        }
        self.repo.delete_by_id(id).await?;
        info!("group_deleted");
        Ok(())
    }

    #[instrument(skip(self, input))]
    pub async fn update_by_id(&self, id: &str, input: GroupInput) -> Result<Group, ServiceError> {
        let mut group = self.repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("update of unknown group id");
            ServiceError::NotFound(UPDATE_MISSING_MSG.into())
        })?;
        group.apply_update(input);
        let group = self.repo.save(group).await?;
        info!("group_updated");
        Ok(group)
    }
}
