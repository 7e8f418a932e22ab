use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain-text bodies returned by the mutating group endpoints.
pub mod messages {
    pub const GROUP_CREATED: &str = "Group created successfully";
    pub const GROUP_UPDATED: &str = "Group updated successfully";
    pub const GROUP_DELETED: &str = "Group deleted successfully";
}
