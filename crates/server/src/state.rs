use std::sync::Arc;

use service::group::{repository::GroupRepository, GroupService};

/// Shared handler state: one service instance over one repository.
#[derive(Clone)]
pub struct ServerState {
    pub groups: Arc<GroupService<dyn GroupRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn GroupRepository>) -> Self {
        Self { groups: Arc::new(GroupService::new(repo)) }
    }
}
